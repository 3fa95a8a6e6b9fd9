//! `--configure`: write command-line values into the stored config instead of downloading.

use anyhow::Result;

use crate::config::{ConfigStore, GlobalConfig, LocalConfig};
use crate::notice::{Notice, Scope, StartSource};

/// Which records to edit. Both may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigureScope {
    pub global: bool,
    pub local: bool,
}

impl ConfigureScope {
    pub fn any(self) -> bool {
        self.global || self.local
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEdit {
    /// Replaces `dl-args` in every selected scope, even when empty.
    pub dl_args: String,
    /// Local only.
    pub url: Option<String>,
    /// Local only.
    pub start: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ConfigureReport {
    pub global: GlobalConfig,
    pub local: LocalConfig,
    pub notices: Vec<Notice>,
}

/// Applies `edit` to the selected scopes and persists them unless `dry_run`.
pub fn configure(
    store: &ConfigStore,
    scope: ConfigureScope,
    edit: &ConfigEdit,
    dry_run: bool,
    mut global: GlobalConfig,
    mut local: LocalConfig,
) -> Result<ConfigureReport> {
    let mut notices = Vec::new();

    if scope.global {
        notices.push(change(Scope::Global, "dl-args", &global.dl_args, &edit.dl_args, dry_run));
        global.dl_args = edit.dl_args.clone();
        if !dry_run {
            store.save_global(&global)?;
            tracing::info!("updated global config {}", store.global_path().display());
        }
    }

    if scope.local {
        notices.push(change(Scope::Local, "dl-args", &local.dl_args, &edit.dl_args, dry_run));
        local.dl_args = edit.dl_args.clone();

        if let Some(url) = edit.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            notices.push(change(Scope::Local, "url", &local.url, url, dry_run));
            local.url = url.to_owned();
        }

        if let Some(start) = edit.start {
            let start = match start {
                0 => 1,
                s if s < 0 => {
                    notices.push(Notice::NegativeStart {
                        start: s,
                        source: StartSource::CommandLine,
                    });
                    s
                }
                s => s,
            };
            notices.push(change(
                Scope::Local,
                "start",
                &local.start.to_string(),
                &start.to_string(),
                dry_run,
            ));
            local.start = start;
        }

        if !dry_run {
            store.save_local(&local)?;
            tracing::info!("updated local config {}", store.local_path().display());
        }
    }

    Ok(ConfigureReport {
        global,
        local,
        notices,
    })
}

fn change(scope: Scope, key: &'static str, from: &str, to: &str, dry_run: bool) -> Notice {
    Notice::ConfigChange {
        scope,
        key,
        from: from.to_owned(),
        to: to.to_owned(),
        dry_run,
    }
}
