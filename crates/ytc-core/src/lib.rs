//! Resumable playlist downloads on top of an external downloader (`youtube-dl`).
//!
//! Each playlist lives in its own directory with a local config holding the
//! playlist URL and the index to resume from. A run merges global, local and
//! command-line downloader arguments, invokes the downloader once, and moves
//! the cursor based on which numbered files ended up on disk.

pub mod command;
pub mod config;
pub mod configure;
pub mod downloader;
pub mod logging;
pub mod merge;
pub mod notice;
pub mod resume;
pub mod scan;
pub mod status;

