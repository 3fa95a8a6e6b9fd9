//! Invocation of the external downloader.
//!
//! The tool only sees the downloader as a program that takes an argument
//! vector and returns an exit status. [`Downloader`] is the seam; the real
//! implementation is [`ProcessDownloader`].

mod process;

use std::path::Path;

use crate::command::DownloadCommand;

pub use process::ProcessDownloader;

/// How a downloader run that did start ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Success,
    /// Non-zero exit (or `128 + signal` when killed).
    Failed(i32),
}

impl DownloadOutcome {
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            DownloadOutcome::Success
        } else {
            DownloadOutcome::Failed(code)
        }
    }

    pub fn is_success(self) -> bool {
        self == DownloadOutcome::Success
    }
}

/// The downloader never ran.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("downloader `{program}` not found; is it installed and on PATH?")]
    NotFound { program: String },
    #[error("could not start downloader `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs a download command to completion inside `workdir`.
pub trait Downloader {
    fn run(&self, cmd: &DownloadCommand, workdir: &Path) -> Result<DownloadOutcome, LaunchError>;
}

impl<D: Downloader + ?Sized> Downloader for &D {
    fn run(&self, cmd: &DownloadCommand, workdir: &Path) -> Result<DownloadOutcome, LaunchError> {
        (**self).run(cmd, workdir)
    }
}
