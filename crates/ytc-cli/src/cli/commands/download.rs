//! Default mode: resume the playlist download in the current directory.

use anyhow::Result;
use std::path::Path;
use ytc_core::config::{ConfigStore, GlobalConfig, LocalConfig};
use ytc_core::downloader::ProcessDownloader;
use ytc_core::resume::{Controller, ResumeRequest};

use crate::cli::render::print_notices;
use crate::cli::Cli;

pub fn run_download(
    cli: &Cli,
    prog: &str,
    store: &ConfigStore,
    workdir: &Path,
    global: &GlobalConfig,
    local: LocalConfig,
) -> Result<i32> {
    let req = ResumeRequest {
        url: cli.url.clone(),
        start: cli.start,
        dl_args: cli.passthrough_args(),
        dry_run: cli.dry_run,
    };
    let report = Controller::new(store, ProcessDownloader, workdir).run(&req, global, local)?;
    print_notices(&report.notices, prog);

    let code = report.status.code();
    if report.status.is_ok() {
        tracing::info!("run finished, next start {}", report.local.start);
    } else {
        tracing::warn!(status = ?report.status, code, "run did not complete");
    }
    Ok(code)
}
