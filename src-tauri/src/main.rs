#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_menu;
mod app_runtime;
mod app_types;
mod exit_events;
mod logging;
mod menu_actions;
mod menu_handler;
mod renderer_bridge_commands;
mod renderer_message;
mod runtime_paths;
mod startup_args;
mod windows;

pub(crate) use app_constants::*;
pub(crate) use app_types::{RendererReadyResult, ShellState};
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
