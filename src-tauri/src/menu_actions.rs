use std::path::PathBuf;

use crate::renderer_message::{Overlay, RendererMessage};

pub const MENU_OPEN_FILE: &str = "menu_open_file";
pub const MENU_SAVE_DECOMPRESSED: &str = "menu_save_decompressed";
pub const MENU_TOGGLE_DEVTOOLS: &str = "menu_toggle_devtools";
pub const MENU_FORWARD: &str = "menu_forward";
pub const MENU_BACK: &str = "menu_back";
pub const MENU_MOVE_TO_START: &str = "menu_move_to_start";
pub const MENU_MOVE_TO_END: &str = "menu_move_to_end";
pub const MENU_TOGGLE_WEAPON_RANGES: &str = "menu_toggle_weapon_ranges";
pub const MENU_TOGGLE_DOCKING_RANGES: &str = "menu_toggle_docking_ranges";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    OpenFile,
    SaveDecompressed,
    ToggleDevtools,
    Forward,
    Back,
    MoveToStart,
    MoveToEnd,
    ToggleWeaponRanges,
    ToggleDockingRanges,
}

pub fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_OPEN_FILE => Some(MenuAction::OpenFile),
        MENU_SAVE_DECOMPRESSED => Some(MenuAction::SaveDecompressed),
        MENU_TOGGLE_DEVTOOLS => Some(MenuAction::ToggleDevtools),
        MENU_FORWARD => Some(MenuAction::Forward),
        MENU_BACK => Some(MenuAction::Back),
        MENU_MOVE_TO_START => Some(MenuAction::MoveToStart),
        MENU_MOVE_TO_END => Some(MenuAction::MoveToEnd),
        MENU_TOGGLE_WEAPON_RANGES => Some(MenuAction::ToggleWeaponRanges),
        MENU_TOGGLE_DOCKING_RANGES => Some(MenuAction::ToggleDockingRanges),
        _ => None,
    }
}

impl MenuAction {
    /// Message sent straight away, for actions that need no dialog or host role.
    pub fn immediate_message(self) -> Option<RendererMessage> {
        match self {
            MenuAction::Forward => Some(RendererMessage::Forward(1)),
            MenuAction::Back => Some(RendererMessage::Forward(-1)),
            MenuAction::MoveToStart => Some(RendererMessage::move_to_start()),
            MenuAction::MoveToEnd => Some(RendererMessage::move_to_end()),
            MenuAction::ToggleWeaponRanges => Some(RendererMessage::Toggle(Overlay::WeaponRanges)),
            MenuAction::ToggleDockingRanges => {
                Some(RendererMessage::Toggle(Overlay::DockingRanges))
            }
            MenuAction::OpenFile | MenuAction::SaveDecompressed | MenuAction::ToggleDevtools => {
                None
            }
        }
    }
}

pub fn open_message_for_selection(selection: Option<Vec<PathBuf>>) -> Option<RendererMessage> {
    selection?.into_iter().next().map(RendererMessage::Open)
}

pub fn save_message_for_selection(selection: Option<PathBuf>) -> Option<RendererMessage> {
    selection
        .filter(|path| !path.as_os_str().is_empty())
        .map(RendererMessage::Save)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        let cases = [
            (MENU_OPEN_FILE, MenuAction::OpenFile),
            (MENU_SAVE_DECOMPRESSED, MenuAction::SaveDecompressed),
            (MENU_TOGGLE_DEVTOOLS, MenuAction::ToggleDevtools),
            (MENU_FORWARD, MenuAction::Forward),
            (MENU_BACK, MenuAction::Back),
            (MENU_MOVE_TO_START, MenuAction::MoveToStart),
            (MENU_MOVE_TO_END, MenuAction::MoveToEnd),
            (MENU_TOGGLE_WEAPON_RANGES, MenuAction::ToggleWeaponRanges),
            (MENU_TOGGLE_DOCKING_RANGES, MenuAction::ToggleDockingRanges),
        ];
        for (menu_id, action) in cases {
            assert_eq!(action_from_menu_id(menu_id), Some(action), "{menu_id}");
        }
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
    }

    #[test]
    fn navigation_actions_send_relative_steps() {
        assert_eq!(
            MenuAction::Forward.immediate_message(),
            Some(RendererMessage::Forward(1))
        );
        assert_eq!(
            MenuAction::Back.immediate_message(),
            Some(RendererMessage::Forward(-1))
        );
        assert_eq!(
            MenuAction::MoveToStart.immediate_message(),
            Some(RendererMessage::Forward(-99_999))
        );
        assert_eq!(
            MenuAction::MoveToEnd.immediate_message(),
            Some(RendererMessage::Forward(99_999))
        );
    }

    #[test]
    fn view_actions_toggle_overlays() {
        assert_eq!(
            MenuAction::ToggleWeaponRanges.immediate_message(),
            Some(RendererMessage::Toggle(Overlay::WeaponRanges))
        );
        assert_eq!(
            MenuAction::ToggleDockingRanges.immediate_message(),
            Some(RendererMessage::Toggle(Overlay::DockingRanges))
        );
    }

    #[test]
    fn dialog_and_role_actions_have_no_immediate_message() {
        for action in [
            MenuAction::OpenFile,
            MenuAction::SaveDecompressed,
            MenuAction::ToggleDevtools,
        ] {
            assert_eq!(action.immediate_message(), None);
        }
    }

    #[test]
    fn open_message_uses_first_selected_path() {
        let selection = Some(vec![PathBuf::from("first.hlt"), PathBuf::from("second.hlt")]);
        assert_eq!(
            open_message_for_selection(selection),
            Some(RendererMessage::Open(PathBuf::from("first.hlt")))
        );
    }

    #[test]
    fn cancelled_or_empty_open_selection_sends_nothing() {
        assert_eq!(open_message_for_selection(None), None);
        assert_eq!(open_message_for_selection(Some(Vec::new())), None);
    }

    #[test]
    fn save_message_requires_selected_path() {
        assert_eq!(
            save_message_for_selection(Some(PathBuf::from("out.json"))),
            Some(RendererMessage::Save(PathBuf::from("out.json")))
        );
        assert_eq!(save_message_for_selection(None), None);
        assert_eq!(save_message_for_selection(Some(PathBuf::new())), None);
    }
}
