//! Resumable playlist download: one downloader run plus cursor bookkeeping.
//!
//! A run resolves the playlist URL and start index from the command line and
//! the local config, invokes the downloader once, then rescans the directory
//! to decide where the next run picks up. The local config is the only thing
//! written, and never in dry-run mode.

mod cursor;

use anyhow::Result;
use std::path::Path;

use crate::command::DownloadCommand;
use crate::config::{ConfigStore, GlobalConfig, LocalConfig};
use crate::downloader::{DownloadOutcome, Downloader};
use crate::merge::merge_args;
use crate::notice::Notice;
use crate::scan;
use crate::status::RunStatus;

pub use cursor::{next_start, resolve_start};

/// Per-invocation overrides from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeRequest {
    pub url: Option<String>,
    pub start: Option<i64>,
    /// Highest-priority downloader argument layer.
    pub dl_args: String,
    pub dry_run: bool,
}

/// Result of [`Controller::run`].
#[derive(Debug, Clone)]
pub struct RunReport {
    pub status: RunStatus,
    /// Local config as it stands after the run (persisted unless dry run).
    pub local: LocalConfig,
    /// Command that was (or in dry-run, would have been) executed.
    pub command: Option<DownloadCommand>,
    pub notices: Vec<Notice>,
}

pub struct Controller<'a, D> {
    store: &'a ConfigStore,
    downloader: D,
    workdir: &'a Path,
}

impl<'a, D: Downloader> Controller<'a, D> {
    pub fn new(store: &'a ConfigStore, downloader: D, workdir: &'a Path) -> Self {
        Self {
            store,
            downloader,
            workdir,
        }
    }

    pub fn run(
        &self,
        req: &ResumeRequest,
        global: &GlobalConfig,
        mut local: LocalConfig,
    ) -> Result<RunReport> {
        let mut notices = Vec::new();

        let supplied = req
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_owned);
        let stored = local.stored_url().map(str::to_owned);

        let url = match (supplied, stored) {
            (Some(supplied), Some(stored)) if supplied == stored => {
                notices.push(Notice::UrlAlreadyStored);
                supplied
            }
            (Some(supplied), Some(stored)) => {
                tracing::warn!(%stored, %supplied, "playlist URL mismatch, aborting");
                notices.push(Notice::UrlMismatch { stored, supplied });
                return Ok(RunReport::stopped(RunStatus::ChangedUrl, local, notices));
            }
            (Some(supplied), None) => {
                local.url = supplied.clone();
                if req.dry_run {
                    notices.push(Notice::WouldStoreUrl { url: supplied.clone() });
                } else {
                    self.store.save_local(&local)?;
                    tracing::info!(url = %supplied, "stored playlist URL");
                    notices.push(Notice::UrlStored { url: supplied.clone() });
                }
                supplied
            }
            (None, Some(stored)) => {
                notices.push(Notice::ContinuingStored { url: stored.clone() });
                stored
            }
            (None, None) => {
                notices.push(Notice::MissingUrl);
                return Ok(RunReport::stopped(RunStatus::MissingUrl, local, notices));
            }
        };

        let start = resolve_start(req.start, local.start, &mut notices);

        let merged = merge_args(&[
            global.dl_args.as_str(),
            local.dl_args.as_str(),
            req.dl_args.as_str(),
        ]);
        let cmd = DownloadCommand::build(global.downloader(), &merged, start, &url);
        tracing::debug!(command = %cmd, dry_run = req.dry_run, "composed downloader command");

        if req.dry_run {
            notices.push(Notice::WouldExecute(cmd.clone()));
            return Ok(RunReport {
                status: RunStatus::Ok,
                local,
                command: Some(cmd),
                notices,
            });
        }

        let outcome = match self.downloader.run(&cmd, self.workdir) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("{}", e);
                notices.push(Notice::LaunchFailed {
                    reason: e.to_string(),
                });
                return Ok(RunReport {
                    status: RunStatus::LaunchFailed,
                    local,
                    command: Some(cmd),
                    notices,
                });
            }
        };

        match self.reconcile(start, outcome, &mut local) {
            Ok(notice) => notices.push(notice),
            Err(e) => {
                tracing::error!("could not update resume cursor: {:#}", e);
                notices.push(Notice::CursorNotSaved {
                    reason: format!("{:#}", e),
                });
            }
        }

        let status = match outcome {
            DownloadOutcome::Success => RunStatus::Ok,
            DownloadOutcome::Failed(code) => RunStatus::DownloaderFailed(code),
        };
        Ok(RunReport {
            status,
            local,
            command: Some(cmd),
            notices,
        })
    }
}

impl<D> Controller<'_, D> {
    /// Rescans the directory and persists the next start index.
    fn reconcile(
        &self,
        start: i64,
        outcome: DownloadOutcome,
        local: &mut LocalConfig,
    ) -> Result<Notice> {
        let last_index = scan::last_index(self.workdir)?;
        match next_start(start, last_index, outcome) {
            Some(next) => {
                let mut updated = local.clone();
                updated.start = next;
                self.store.save_local(&updated)?;
                *local = updated;
                tracing::info!(start, last_index, next, ?outcome, "saved resume cursor");
                Ok(Notice::NextStart {
                    start: next,
                    last_index,
                })
            }
            None => {
                tracing::info!(start, "no downloaded items found, cursor unchanged");
                Ok(Notice::NothingDownloaded)
            }
        }
    }
}

impl RunReport {
    fn stopped(status: RunStatus, local: LocalConfig, notices: Vec<Notice>) -> Self {
        Self {
            status,
            local,
            command: None,
            notices,
        }
    }
}

#[cfg(test)]
mod tests;
