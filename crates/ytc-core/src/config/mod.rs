//! Global and per-directory configuration records.
//!
//! Both scopes live in TOML files with a single `[main]` table. The global
//! file sits under the XDG config dir and applies to every playlist; the local
//! file sits in the playlist directory and carries the URL and resume cursor.

mod store;

use serde::{Deserialize, Serialize};

pub use store::{ConfigStore, GLOBAL_CONFIG_FILE, LOCAL_CONFIG_FILE};

/// Downloader program used when the global config does not name one.
pub const DEFAULT_DOWNLOADER: &str = "youtube-dl";

/// Settings shared by every playlist directory of this user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Base downloader arguments, lowest merge priority.
    pub dl_args: String,
    /// Program to invoke instead of `youtube-dl` (e.g. `yt-dlp`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloader: Option<String>,
}

impl GlobalConfig {
    pub fn downloader(&self) -> &str {
        match self.downloader.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d,
            _ => DEFAULT_DOWNLOADER,
        }
    }
}

/// Settings for one playlist directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LocalConfig {
    /// Downloader arguments layered over the global ones.
    pub dl_args: String,
    /// Playlist reference; empty until the first run stores it.
    pub url: String,
    /// Playlist index the next run starts from. Negative values load and
    /// get flagged at run time.
    pub start: i64,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            dl_args: String::new(),
            url: String::new(),
            start: 1,
        }
    }
}

impl LocalConfig {
    /// Stored URL, if any.
    pub fn stored_url(&self) -> Option<&str> {
        let url = self.url.trim();
        (!url.is_empty()).then_some(url)
    }
}

/// On-disk layout: every record sits under `[main]`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile<T> {
    #[serde(default)]
    main: T,
}
