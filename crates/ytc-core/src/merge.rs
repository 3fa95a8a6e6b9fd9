//! Layered downloader arguments: global, then local, then command line.
//!
//! Each layer either replaces what came before or, when it starts with `+`,
//! appends to it. Blank layers are skipped.

/// Marker that turns a layer into an append.
pub const APPEND_MARKER: char = '+';

/// Merges argument layers from lowest to highest priority.
///
/// ```
/// use ytc_core::merge::merge_args;
/// assert_eq!(merge_args(&["-w -c", "+--max-quality=45", "-f best"]), "-f best");
/// assert_eq!(merge_args(&["-w", "+-c", "+--max-quality=45"]), "-w -c --max-quality=45");
/// ```
pub fn merge_args<S: AsRef<str>>(layers: &[S]) -> String {
    let mut merged = String::new();
    for layer in layers.iter().map(|l| l.as_ref().trim()) {
        if layer.is_empty() {
            continue;
        }
        match layer.strip_prefix(APPEND_MARKER) {
            Some(rest) => {
                let rest = rest.trim_start_matches(|c: char| c == APPEND_MARKER || c.is_whitespace());
                if rest.is_empty() {
                    continue;
                }
                if !merged.is_empty() {
                    merged.push(' ');
                }
                merged.push_str(rest);
            }
            None => {
                merged.clear();
                merged.push_str(layer);
            }
        }
    }
    merged
}

/// Splits a merged argument string into argv entries using shell quoting rules.
///
/// Unbalanced quotes fall back to plain whitespace splitting.
pub fn split_args(args: &str) -> Vec<String> {
    match shlex::split(args) {
        Some(parts) => parts,
        None => {
            tracing::warn!(args, "unbalanced quotes in downloader arguments, splitting on whitespace");
            args.split_whitespace().map(str::to_owned).collect()
        }
    }
}
