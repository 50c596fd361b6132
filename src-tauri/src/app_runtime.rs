use std::path::PathBuf;

use tauri::RunEvent;

use crate::{
    app_menu, append_desktop_log, append_startup_log, exit_events, menu_handler,
    renderer_bridge_commands, windows, ShellState, DESKTOP_LOG_FILE, RENDERER_PAGE,
    RENDERER_WINDOW_HEIGHT, RENDERER_WINDOW_LABEL, RENDERER_WINDOW_TITLE, RENDERER_WINDOW_WIDTH,
};

fn renderer_window_options() -> windows::WindowOptions {
    windows::WindowOptions {
        title: RENDERER_WINDOW_TITLE,
        width: RENDERER_WINDOW_WIDTH,
        height: RENDERER_WINDOW_HEIGHT,
        resizable: true,
        page: PathBuf::from(RENDERER_PAGE),
    }
}

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        crate::logging::resolve_desktop_log_path(
            crate::runtime_paths::default_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, argv, _cwd| {
            renderer_bridge_commands::handle_second_instance(app_handle, argv);
        }))
        .plugin(tauri_plugin_dialog::init())
        .manage(ShellState::default())
        .invoke_handler(tauri::generate_handler![
            crate::renderer_bridge_commands::renderer_ready,
        ])
        .on_menu_event(|app_handle, event| {
            menu_handler::handle_menu_event(app_handle, event.id().as_ref());
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            if let Err(error) = app_menu::install_app_menu(&app_handle) {
                append_startup_log(&format!("failed to initialize application menu: {error}"));
            }

            windows::create_window(&app_handle, RENDERER_WINDOW_LABEL, &renderer_window_options())?;
            append_startup_log(&format!("created window '{RENDERER_WINDOW_LABEL}'"));
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, .. } => {
                exit_events::handle_exit_requested(app_handle, code);
            }
            RunEvent::Exit => {
                exit_events::handle_exit_event(app_handle);
            }
            RunEvent::Ready => {
                append_desktop_log("event loop ready");
            }
            _ => {}
        });
}
