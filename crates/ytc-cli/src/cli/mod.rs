//! CLI for resumable playlist downloads.

mod commands;
mod render;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use ytc_core::config::ConfigStore;
use ytc_core::configure::ConfigureScope;

use commands::{run_configure, run_download};

const EPILOG: &str = "\
If --configure is present, the URL and start index only update the stored \
settings and the downloader is not called. Otherwise, the arguments passed to \
the downloader are a merger of the global, local, and command-line arguments, \
in that order: a set starting with '+' is appended to the previous ones, any \
other set replaces them.

ytc sets its own output filename template (playlist index first). Changing the \
template breaks resuming.";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ytc", version)]
#[command(about = "Manage youtube-dl playlist directories", long_about = None)]
#[command(after_help = EPILOG)]
pub struct Cli {
    /// Do not run the downloader; print the command line instead. With --configure,
    /// print old and new values without saving them.
    #[arg(short, long)]
    pub dry_run: bool,

    /// Playlist reference the downloader understands. Only needed on the first run.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Playlist index to start at for this run.
    #[arg(short, long, value_name = "INDEX", allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Change stored configuration instead of downloading.
    #[arg(
        long,
        value_enum,
        ignore_case = true,
        action = ArgAction::Append,
        value_name = "SCOPE",
        help_heading = "Managing stored settings"
    )]
    pub configure: Vec<ConfigureTarget>,

    /// Change global configuration. Shorthand for --configure=global.
    #[arg(short = 'G', long = "global", help_heading = "Managing stored settings")]
    pub global: bool,

    /// Change local (this directory) configuration. Shorthand for --configure=local.
    #[arg(short = 'L', long = "local", help_heading = "Managing stored settings")]
    pub local: bool,

    /// Arguments for the downloader, e.g. quality settings. Put them after `--`:
    /// `ytc -- -w -c --max-quality=22/45`.
    #[arg(value_name = "...", trailing_var_arg = true, allow_hyphen_values = true)]
    pub dl_args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigureTarget {
    Local,
    Global,
    Both,
}

impl Cli {
    pub fn configure_scope(&self) -> ConfigureScope {
        let mut scope = ConfigureScope {
            global: self.global,
            local: self.local,
        };
        for target in &self.configure {
            match target {
                ConfigureTarget::Local => scope.local = true,
                ConfigureTarget::Global => scope.global = true,
                ConfigureTarget::Both => {
                    scope.local = true;
                    scope.global = true;
                }
            }
        }
        scope
    }

    /// Command-line downloader arguments with separator tokens removed.
    pub fn passthrough_args(&self) -> String {
        self.dl_args
            .iter()
            .filter(|a| a.as_str() != "--")
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parses the process arguments and runs; returns the exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let prog = std::env::args().next().unwrap_or_else(|| "ytc".to_owned());

        let workdir = std::env::current_dir()?;
        let store = ConfigStore::open_default(&workdir)?;
        let global = store.load_global()?;
        let local = store.load_local()?;
        tracing::debug!(?global, ?local, "loaded config");

        let scope = cli.configure_scope();
        if scope.any() {
            run_configure(&cli, &prog, &store, scope, global, local)
        } else {
            run_download(&cli, &prog, &store, &workdir, &global, local)
        }
    }
}

#[cfg(test)]
mod tests;
