use std::{
    ffi::OsString,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::startup_args;

#[derive(Debug)]
pub(crate) struct ShellState {
    pub(crate) startup_args: Vec<String>,
    pub(crate) is_quitting: AtomicBool,
}

impl ShellState {
    pub(crate) fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            startup_args: args.into_iter().collect(),
            is_quitting: AtomicBool::new(false),
        }
    }

    /// Non-UTF-8 arguments are converted lossily instead of aborting startup.
    pub(crate) fn from_os_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::from_args(args.into_iter().map(|arg| arg.to_string_lossy().into_owned()))
    }

    pub(crate) fn startup_open_file(&self) -> Option<String> {
        startup_args::open_file_from_args(&self.startup_args)
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.is_quitting.load(Ordering::Relaxed)
    }

    /// Returns `true` only for the first caller.
    pub(crate) fn try_mark_quitting(&self) -> bool {
        self.is_quitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::from_os_args(std::env::args_os())
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RendererReadyResult {
    pub(crate) ok: bool,
    pub(crate) opened_file: Option<String>,
    pub(crate) reason: Option<String>,
}
