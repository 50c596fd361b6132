use std::path::PathBuf;

use serde_json::Value;

use crate::FORWARD_JUMP_STEPS;

pub const RENDERER_MESSAGE_OPEN: &str = "open";
pub const RENDERER_MESSAGE_SAVE: &str = "save";
pub const RENDERER_MESSAGE_FORWARD: &str = "forward";
pub const RENDERER_MESSAGE_TOGGLE: &str = "toggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    WeaponRanges,
    DockingRanges,
}

impl Overlay {
    pub fn as_str(self) -> &'static str {
        match self {
            Overlay::WeaponRanges => "weapon_ranges",
            Overlay::DockingRanges => "docking_ranges",
        }
    }
}

/// One-way message delivered to the renderer page as a named event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererMessage {
    /// Load and display a replay file.
    Open(PathBuf),
    /// Write the current decompressed replay as JSON.
    Save(PathBuf),
    /// Move by a relative number of frames.
    Forward(i32),
    Toggle(Overlay),
}

impl RendererMessage {
    pub fn open_path(path: impl Into<PathBuf>) -> Self {
        Self::Open(path.into())
    }

    pub fn move_to_start() -> Self {
        Self::Forward(-FORWARD_JUMP_STEPS)
    }

    pub fn move_to_end() -> Self {
        Self::Forward(FORWARD_JUMP_STEPS)
    }

    pub fn name(&self) -> &'static str {
        match self {
            RendererMessage::Open(_) => RENDERER_MESSAGE_OPEN,
            RendererMessage::Save(_) => RENDERER_MESSAGE_SAVE,
            RendererMessage::Forward(_) => RENDERER_MESSAGE_FORWARD,
            RendererMessage::Toggle(_) => RENDERER_MESSAGE_TOGGLE,
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            RendererMessage::Open(path) | RendererMessage::Save(path) => {
                Value::String(path.to_string_lossy().into_owned())
            }
            RendererMessage::Forward(steps) => Value::from(*steps),
            RendererMessage::Toggle(overlay) => Value::String(overlay.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renderer_message_names_match_page_events() {
        assert_eq!(RendererMessage::open_path("a.hlt").name(), "open");
        assert_eq!(RendererMessage::Save(PathBuf::from("a.json")).name(), "save");
        assert_eq!(RendererMessage::Forward(1).name(), "forward");
        assert_eq!(RendererMessage::Toggle(Overlay::WeaponRanges).name(), "toggle");
    }

    #[test]
    fn renderer_message_payloads_are_plain_json_values() {
        assert_eq!(RendererMessage::open_path("replay.hlt").payload(), json!("replay.hlt"));
        assert_eq!(RendererMessage::Forward(-1).payload(), json!(-1));
        assert_eq!(
            RendererMessage::Toggle(Overlay::DockingRanges).payload(),
            json!("docking_ranges")
        );
    }

    #[test]
    fn jump_messages_use_sentinel_step() {
        assert_eq!(RendererMessage::move_to_start(), RendererMessage::Forward(-99_999));
        assert_eq!(RendererMessage::move_to_end(), RendererMessage::Forward(99_999));
    }
}
