use tauri::{AppHandle, Manager};

use crate::{append_shutdown_log, ShellState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitDecision {
    QuitAfterLastWindowClosed,
    QuitWithCode(i32),
    AlreadyQuitting,
}

fn decide_exit(code: Option<i32>, first_quit_request: bool) -> ExitDecision {
    if !first_quit_request {
        return ExitDecision::AlreadyQuitting;
    }
    match code {
        None => ExitDecision::QuitAfterLastWindowClosed,
        Some(code) => ExitDecision::QuitWithCode(code),
    }
}

/// Never prevents the exit: closing the last window always ends the process.
pub fn handle_exit_requested(app_handle: &AppHandle, code: Option<i32>) {
    let state = app_handle.state::<ShellState>();
    match decide_exit(code, state.try_mark_quitting()) {
        ExitDecision::QuitAfterLastWindowClosed => {
            append_shutdown_log("all windows closed, quitting desktop process")
        }
        ExitDecision::QuitWithCode(code) => {
            append_shutdown_log(&format!("exit requested with code {code}"))
        }
        ExitDecision::AlreadyQuitting => {}
    }
}

pub fn handle_exit_event(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    if state.try_mark_quitting() {
        append_shutdown_log("desktop process exiting without exit request");
    }
    append_shutdown_log("desktop process exited");
}

#[cfg(test)]
mod tests {
    use super::{decide_exit, ExitDecision};

    #[test]
    fn decide_exit_quits_when_last_window_closed() {
        assert_eq!(
            decide_exit(None, true),
            ExitDecision::QuitAfterLastWindowClosed
        );
    }

    #[test]
    fn decide_exit_keeps_explicit_exit_code() {
        assert_eq!(decide_exit(Some(0), true), ExitDecision::QuitWithCode(0));
    }

    #[test]
    fn decide_exit_ignores_repeated_requests() {
        assert_eq!(decide_exit(None, false), ExitDecision::AlreadyQuitting);
        assert_eq!(decide_exit(Some(1), false), ExitDecision::AlreadyQuitting);
    }
}
