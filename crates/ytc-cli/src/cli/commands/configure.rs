//! `--configure` / `-G` / `-L` – update stored settings, no download.

use anyhow::Result;
use ytc_core::config::{ConfigStore, GlobalConfig, LocalConfig};
use ytc_core::configure::{configure, ConfigEdit, ConfigureScope};
use ytc_core::status;

use crate::cli::render::print_notices;
use crate::cli::Cli;

pub fn run_configure(
    cli: &Cli,
    prog: &str,
    store: &ConfigStore,
    scope: ConfigureScope,
    global: GlobalConfig,
    local: LocalConfig,
) -> Result<i32> {
    let edit = ConfigEdit {
        dl_args: cli.passthrough_args(),
        url: cli.url.clone(),
        start: cli.start,
    };
    let report = configure(store, scope, &edit, cli.dry_run, global, local)?;
    print_notices(&report.notices, prog);
    Ok(status::OK)
}
