use std::{
    env, fs,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{runtime_paths, DESKTOP_LOG_FILE, DESKTOP_LOG_MAX_BYTES};

const LOG_CATEGORY_DESKTOP: &str = "desktop";
const LOG_CATEGORY_STARTUP: &str = "startup";
const LOG_CATEGORY_SHUTDOWN: &str = "shutdown";

pub fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    root_dir
        .unwrap_or_else(|| env::temp_dir().join("chlorine"))
        .join("logs")
        .join(file_name)
}

fn format_log_line(category: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        category,
        message
    )
}

fn rotated_log_path(log_path: &Path) -> PathBuf {
    let mut rotated = log_path.as_os_str().to_owned();
    rotated.push(".1");
    PathBuf::from(rotated)
}

fn rotate_if_oversized(log_path: &Path, max_bytes: u64) -> Result<(), String> {
    let size = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(error) => {
            return Err(format!(
                "Failed to stat desktop log {}: {}",
                log_path.display(),
                error
            ))
        }
    };
    if size < max_bytes {
        return Ok(());
    }

    let rotated_path = rotated_log_path(log_path);
    let _ = fs::remove_file(&rotated_path);
    fs::rename(log_path, &rotated_path).map_err(|error| {
        format!(
            "Failed to rotate desktop log {}: {}",
            log_path.display(),
            error
        )
    })
}

pub(crate) fn append_log_line(
    log_path: &Path,
    category: &str,
    message: &str,
    max_bytes: u64,
) -> Result<(), String> {
    if let Some(parent_dir) = log_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create desktop log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }
    rotate_if_oversized(log_path, max_bytes)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| format!("Failed to open desktop log {}: {}", log_path.display(), error))?;
    file.write_all(format_log_line(category, message).as_bytes())
        .map_err(|error| format!("Failed to write desktop log {}: {}", log_path.display(), error))
}

fn append_categorized_log(category: &str, message: &str) {
    if cfg!(debug_assertions) {
        eprintln!("[{category}] {message}");
    }

    let log_path =
        resolve_desktop_log_path(runtime_paths::default_root_dir(), DESKTOP_LOG_FILE);
    if let Err(error) = append_log_line(&log_path, category, message, DESKTOP_LOG_MAX_BYTES) {
        eprintln!("{error}");
    }
}

pub fn append_desktop_log(message: &str) {
    append_categorized_log(LOG_CATEGORY_DESKTOP, message);
}

pub fn append_startup_log(message: &str) {
    append_categorized_log(LOG_CATEGORY_STARTUP, message);
}

pub fn append_shutdown_log(message: &str) {
    append_categorized_log(LOG_CATEGORY_SHUTDOWN, message);
}
