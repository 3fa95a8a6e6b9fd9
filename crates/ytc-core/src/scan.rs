//! Finds the highest playlist index already downloaded into a directory.
//!
//! Downloaded files are named `<index>-<rest>` by the output template in
//! [`crate::command::OUTPUT_TEMPLATE`]; anything else in the directory is
//! ignored.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Playlist index encoded at the start of `name`, if it has the `<digits>-` shape.
pub fn marker_index(name: &str) -> Option<u64> {
    let (head, _) = name.split_once('-')?;
    if head.is_empty() || !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    head.parse().ok()
}

/// Largest marker index among `names`, or 0 when none match.
pub fn max_index<I, S>(names: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|n| marker_index(n.as_ref()))
        .max()
        .unwrap_or(0)
}

/// Scans `dir` and returns the highest downloaded playlist index (0 if none).
pub fn last_index(dir: &Path) -> Result<u64> {
    let entries = fs::read_dir(dir).with_context(|| format!("read dir: {}", dir.display()))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read dir entry: {}", dir.display()))?;
        // Non-UTF-8 names cannot carry an ASCII digit prefix we wrote ourselves.
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_owned());
        }
    }
    let last = max_index(&names);
    tracing::debug!(dir = %dir.display(), entries = names.len(), last, "scanned for downloaded items");
    Ok(last)
}
