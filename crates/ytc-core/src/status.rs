//! Run outcomes and the process exit codes they map to.
//!
//! The tool's own codes stay below [`DOWNLOADER_OFFSET`]; a failing downloader
//! is reported as the offset plus its own exit status so the two ranges never
//! overlap.

/// Everything went through.
pub const OK: i32 = 0;
/// No playlist URL on the command line and none stored locally.
pub const MISSING_URL: i32 = 1;
/// Internal failure (config unreadable/unwritable, directory scan failed).
pub const INTERNAL_ERROR: i32 = 3;
/// The downloader executable could not be started. Clap owns 2 for usage errors.
pub const LAUNCH_FAILED: i32 = 4;
/// Supplied URL differs from the stored one; nothing was changed.
pub const CHANGED_URL: i32 = 101;
/// Added to the downloader's exit status.
pub const DOWNLOADER_OFFSET: i32 = 10_000;

/// How a single invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    MissingUrl,
    LaunchFailed,
    ChangedUrl,
    /// Downloader ran and exited non-zero with this status.
    DownloaderFailed(i32),
}

impl RunStatus {
    pub fn code(self) -> i32 {
        match self {
            RunStatus::Ok => OK,
            RunStatus::MissingUrl => MISSING_URL,
            RunStatus::LaunchFailed => LAUNCH_FAILED,
            RunStatus::ChangedUrl => CHANGED_URL,
            RunStatus::DownloaderFailed(status) => DOWNLOADER_OFFSET.saturating_add(status),
        }
    }

    pub fn is_ok(self) -> bool {
        self == RunStatus::Ok
    }
}
