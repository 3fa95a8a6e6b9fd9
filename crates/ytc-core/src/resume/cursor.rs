//! Resume cursor arithmetic: where this run starts, where the next one will.

use crate::downloader::DownloadOutcome;
use crate::notice::{Notice, StartSource};

/// Picks the start index for this run.
///
/// A command-line value beats the stored one. Zero is bumped to 1. A negative
/// value is kept but reported with a hint matching where it came from.
pub fn resolve_start(cli: Option<i64>, stored: i64, notices: &mut Vec<Notice>) -> i64 {
    let (start, source) = match cli {
        Some(s) => (s, StartSource::CommandLine),
        None => (stored, StartSource::Stored),
    };
    match start {
        0 => 1,
        s if s < 0 => {
            tracing::warn!(start = s, ?source, "negative start index");
            notices.push(Notice::NegativeStart { start: s, source });
            s
        }
        s => s,
    }
}

/// Start index for the next run, or `None` to leave the stored one untouched.
///
/// `last_index` is the highest index on disk after the downloader exited.
/// A failed run re-attempts its last file since it may be truncated.
pub fn next_start(start: i64, last_index: u64, outcome: DownloadOutcome) -> Option<i64> {
    if last_index == 0 {
        return None;
    }
    let last = i64::try_from(last_index).unwrap_or(i64::MAX);
    if start > last {
        Some(start)
    } else if outcome.is_success() {
        Some(last.saturating_add(1))
    } else {
        Some(last)
    }
}
