use std::path::PathBuf;

use tauri::{AppHandle, Manager, Runtime};
use tauri_plugin_dialog::{DialogExt, FilePath};

use crate::{
    append_desktop_log, menu_actions, menu_actions::MenuAction, windows, windows::MessageSink,
    ShellState, RENDERER_WINDOW_LABEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandlerDispatchDecision {
    IgnoreBecauseQuitting,
    Proceed,
}

pub(crate) fn decide_handler_dispatch(is_quitting: bool) -> HandlerDispatchDecision {
    if is_quitting {
        HandlerDispatchDecision::IgnoreBecauseQuitting
    } else {
        HandlerDispatchDecision::Proceed
    }
}

/// What a menu click resolved to after any direct message was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuDispatch {
    Ignored,
    MessageSent,
    ShowOpenDialog,
    ShowSaveDialog,
    ToggleDevtools,
}

fn dispatch_menu_id<S>(sink: &S, menu_id: &str, is_quitting: bool) -> MenuDispatch
where
    S: MessageSink + ?Sized,
{
    if decide_handler_dispatch(is_quitting) == HandlerDispatchDecision::IgnoreBecauseQuitting {
        return MenuDispatch::Ignored;
    }
    let Some(action) = menu_actions::action_from_menu_id(menu_id) else {
        return MenuDispatch::Ignored;
    };

    match action {
        MenuAction::OpenFile => MenuDispatch::ShowOpenDialog,
        MenuAction::SaveDecompressed => MenuDispatch::ShowSaveDialog,
        MenuAction::ToggleDevtools => MenuDispatch::ToggleDevtools,
        MenuAction::Forward
        | MenuAction::Back
        | MenuAction::MoveToStart
        | MenuAction::MoveToEnd
        | MenuAction::ToggleWeaponRanges
        | MenuAction::ToggleDockingRanges => {
            let Some(message) = action.immediate_message() else {
                return MenuDispatch::Ignored;
            };
            windows::send_to_window(sink, RENDERER_WINDOW_LABEL, &message, append_desktop_log);
            MenuDispatch::MessageSent
        }
    }
}

fn local_path(file_path: FilePath) -> Option<PathBuf> {
    match file_path.into_path() {
        Ok(path) => Some(path),
        Err(error) => {
            append_desktop_log(&format!("ignoring non-local dialog selection: {error}"));
            None
        }
    }
}

fn show_open_dialog<R: Runtime>(app_handle: &AppHandle<R>) {
    let app_handle_cloned = app_handle.clone();
    app_handle.dialog().file().pick_files(move |file_paths| {
        let selection =
            file_paths.map(|paths| paths.into_iter().filter_map(local_path).collect::<Vec<_>>());
        match menu_actions::open_message_for_selection(selection) {
            Some(message) => windows::send_to_window(
                &app_handle_cloned,
                RENDERER_WINDOW_LABEL,
                &message,
                append_desktop_log,
            ),
            None => append_desktop_log("open dialog closed without a selection"),
        }
    });
}

fn show_save_dialog<R: Runtime>(app_handle: &AppHandle<R>) {
    let app_handle_cloned = app_handle.clone();
    app_handle.dialog().file().save_file(move |file_path| {
        match menu_actions::save_message_for_selection(file_path.and_then(local_path)) {
            Some(message) => windows::send_to_window(
                &app_handle_cloned,
                RENDERER_WINDOW_LABEL,
                &message,
                append_desktop_log,
            ),
            None => append_desktop_log("save dialog closed without a selection"),
        }
    });
}

pub fn handle_menu_event<R: Runtime>(app_handle: &AppHandle<R>, menu_id: &str) {
    let is_quitting = app_handle.state::<ShellState>().is_quitting();
    match dispatch_menu_id(app_handle, menu_id, is_quitting) {
        MenuDispatch::ShowOpenDialog => show_open_dialog(app_handle),
        MenuDispatch::ShowSaveDialog => show_save_dialog(app_handle),
        MenuDispatch::ToggleDevtools => {
            windows::toggle_devtools(app_handle, RENDERER_WINDOW_LABEL, append_desktop_log)
        }
        MenuDispatch::Ignored | MenuDispatch::MessageSent => {}
    }
}
