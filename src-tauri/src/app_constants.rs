pub(crate) const RENDERER_WINDOW_LABEL: &str = "renderer";
pub(crate) const RENDERER_WINDOW_TITLE: &str = "Chlorine";
pub(crate) const RENDERER_PAGE: &str = "chlorine.html";
pub(crate) const RENDERER_WINDOW_WIDTH: f64 = 1200.0;
pub(crate) const RENDERER_WINDOW_HEIGHT: f64 = 800.0;

pub(crate) const OPEN_FILE_FLAG: &str = "-o";

pub(crate) const ROOT_DIR_ENV: &str = "CHLORINE_ROOT";
pub(crate) const DEFAULT_ROOT_DIR_NAME: &str = ".chlorine";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DESKTOP_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Relative step large enough to land on the first or last record.
pub(crate) const FORWARD_JUMP_STEPS: i32 = 99_999;
