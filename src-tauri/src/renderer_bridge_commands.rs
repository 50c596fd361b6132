use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log,
    menu_handler::{self, HandlerDispatchDecision},
    renderer_message::RendererMessage,
    windows,
    windows::MessageSink,
    RendererReadyResult, ShellState, RENDERER_WINDOW_LABEL,
};

fn forward_startup_file<S, F>(sink: &S, startup_file: Option<String>, log: F) -> RendererReadyResult
where
    S: MessageSink + ?Sized,
    F: Fn(&str),
{
    let Some(filename) = startup_file else {
        return RendererReadyResult {
            ok: true,
            opened_file: None,
            reason: None,
        };
    };

    log(&format!("opening startup file from command line: {filename}"));
    let message = RendererMessage::open_path(&filename);
    match sink.emit_to_window(RENDERER_WINDOW_LABEL, message.name(), message.payload()) {
        Ok(()) => RendererReadyResult {
            ok: true,
            opened_file: Some(filename),
            reason: None,
        },
        Err(error) => {
            log(&error);
            RendererReadyResult {
                ok: false,
                opened_file: None,
                reason: Some(error),
            }
        }
    }
}

#[tauri::command]
pub(crate) fn renderer_ready(app_handle: AppHandle) -> RendererReadyResult {
    append_desktop_log("renderer reported ready");
    let state = app_handle.state::<ShellState>();
    if menu_handler::decide_handler_dispatch(state.is_quitting())
        == HandlerDispatchDecision::IgnoreBecauseQuitting
    {
        return RendererReadyResult {
            ok: false,
            opened_file: None,
            reason: Some("Desktop process is quitting.".to_string()),
        };
    }
    forward_startup_file(&app_handle, state.startup_open_file(), append_desktop_log)
}

/// Handles the argument list of a second launch that was folded into this process.
pub(crate) fn handle_second_instance(app_handle: &AppHandle, argv: Vec<String>) {
    let state = app_handle.state::<ShellState>();
    if menu_handler::decide_handler_dispatch(state.is_quitting())
        == HandlerDispatchDecision::IgnoreBecauseQuitting
    {
        append_desktop_log("second instance ignored: desktop process is quitting");
        return;
    }
    append_desktop_log(&format!("second instance launched with {} args", argv.len()));
    if let Some(filename) = crate::startup_args::open_file_from_args(&argv) {
        windows::send_to_window(
            app_handle,
            RENDERER_WINDOW_LABEL,
            &RendererMessage::open_path(filename),
            append_desktop_log,
        );
    }
    windows::focus_window(app_handle, RENDERER_WINDOW_LABEL, append_desktop_log);
}
