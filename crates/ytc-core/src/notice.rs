//! Messages for the user, produced by the controller and the config editor.
//!
//! The core never prints; the CLI decides how each notice is shown.

use crate::command::DownloadCommand;

/// Which configuration record a change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Local,
}

/// Where a start index came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartSource {
    CommandLine,
    Stored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Supplied URL equals the stored one.
    UrlAlreadyStored,
    UrlStored { url: String },
    WouldStoreUrl { url: String },
    ContinuingStored { url: String },
    /// Supplied URL conflicts with the stored one; run aborted.
    UrlMismatch { stored: String, supplied: String },
    MissingUrl,
    NegativeStart { start: i64, source: StartSource },
    WouldExecute(DownloadCommand),
    LaunchFailed { reason: String },
    /// Resume cursor saved after a run.
    NextStart { start: i64, last_index: u64 },
    /// Rescan or save after the downloader ran failed; the downloader's status still stands.
    CursorNotSaved { reason: String },
    /// Nothing on disk yet; stored cursor left alone.
    NothingDownloaded,
    ConfigChange {
        scope: Scope,
        key: &'static str,
        from: String,
        to: String,
        dry_run: bool,
    },
}

impl Notice {
    pub fn level(&self) -> Level {
        match self {
            Notice::UrlMismatch { .. } | Notice::MissingUrl | Notice::LaunchFailed { .. } => {
                Level::Error
            }
            Notice::NegativeStart { .. } | Notice::CursorNotSaved { .. } => Level::Warn,
            _ => Level::Info,
        }
    }
}
