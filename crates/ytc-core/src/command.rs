//! The downloader command line, built as an explicit argument vector.

use std::fmt;

use crate::merge::split_args;

/// Output filename template passed with `-o`.
///
/// The playlist index must stay the leading field followed by `-`:
/// [`crate::scan`] reads it back to find where to resume.
pub const OUTPUT_TEMPLATE: &str = "%(playlist_index)s-%(title)s.%(id)s.%(ext)s";

/// One downloader invocation. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl DownloadCommand {
    /// `program <merged args> --playlist-start=<start> -o <template> <url>`
    pub fn build(program: &str, merged_args: &str, start: i64, url: &str) -> Self {
        let mut args = split_args(merged_args);
        args.push(format!("--playlist-start={}", start));
        args.push("-o".to_owned());
        args.push(OUTPUT_TEMPLATE.to_owned());
        args.push(url.to_owned());
        Self {
            program: program.to_owned(),
            args,
        }
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str))
    }
}

impl fmt::Display for DownloadCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.argv().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'') {
                write!(f, "'{}'", arg.replace('\'', r"'\''"))?;
            } else {
                f.write_str(arg)?;
            }
        }
        Ok(())
    }
}
