use std::path::PathBuf;

use serde_json::Value;
use tauri::{AppHandle, Emitter, Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::renderer_message::RendererMessage;

#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    pub title: &'static str,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
    pub page: PathBuf,
}

/// Delivers a named event to a window addressed by label.
pub trait MessageSink {
    fn emit_to_window(&self, label: &str, event: &str, payload: Value) -> Result<(), String>;
}

impl<R: Runtime> MessageSink for AppHandle<R> {
    fn emit_to_window(&self, label: &str, event: &str, payload: Value) -> Result<(), String> {
        self.emit_to(label, event, payload)
            .map_err(|error| format!("Failed to emit '{event}' to window '{label}': {error}"))
    }
}

pub fn create_window<R: Runtime>(
    app_handle: &AppHandle<R>,
    label: &str,
    options: &WindowOptions,
) -> Result<WebviewWindow<R>, String> {
    WebviewWindowBuilder::new(app_handle, label, WebviewUrl::App(options.page.clone()))
        .title(options.title)
        .inner_size(options.width, options.height)
        .resizable(options.resizable)
        .build()
        .map_err(|error| format!("Failed to create window '{label}': {error}"))
}

/// Fire-and-forget send; failures are logged and dropped.
pub fn send_to_window<S, F>(sink: &S, label: &str, message: &RendererMessage, log: F)
where
    S: MessageSink + ?Sized,
    F: Fn(&str),
{
    if let Err(error) = sink.emit_to_window(label, message.name(), message.payload()) {
        log(&error);
    }
}

pub fn focus_window<R: Runtime, F>(app_handle: &AppHandle<R>, label: &str, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(label) else {
        log(&format!("focus_window skipped: window '{label}' not found"));
        return;
    };

    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize window '{label}': {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show window '{label}': {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus window '{label}': {error}"));
    }
}

pub fn toggle_devtools<R: Runtime, F>(app_handle: &AppHandle<R>, label: &str, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(label) else {
        log(&format!("toggle_devtools skipped: window '{label}' not found"));
        return;
    };

    if window.is_devtools_open() {
        window.close_devtools();
    } else {
        window.open_devtools();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use serde_json::Value;

    use super::MessageSink;

    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub(crate) sent: RefCell<Vec<(String, String, Value)>>,
        pub(crate) fail_with: Option<String>,
    }

    impl MessageSink for RecordingSink {
        fn emit_to_window(&self, label: &str, event: &str, payload: Value) -> Result<(), String> {
            if let Some(error) = &self.fail_with {
                return Err(error.clone());
            }
            self.sent
                .borrow_mut()
                .push((label.to_string(), event.to_string(), payload));
            Ok(())
        }
    }
}
