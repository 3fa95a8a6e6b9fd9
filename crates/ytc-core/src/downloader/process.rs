//! Blocking subprocess runner.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use super::{DownloadOutcome, Downloader, LaunchError};
use crate::command::DownloadCommand;

/// Runs the downloader with inherited stdio and waits for it, with no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessDownloader;

impl Downloader for ProcessDownloader {
    fn run(&self, cmd: &DownloadCommand, workdir: &Path) -> Result<DownloadOutcome, LaunchError> {
        tracing::info!(program = %cmd.program, args = ?cmd.args, "starting downloader");
        let status = Command::new(&cmd.program)
            .args(&cmd.args)
            .current_dir(workdir)
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => LaunchError::NotFound {
                    program: cmd.program.clone(),
                },
                _ => LaunchError::Spawn {
                    program: cmd.program.clone(),
                    source: e,
                },
            })?;
        let code = exit_code(status);
        tracing::info!(program = %cmd.program, code, "downloader finished");
        Ok(DownloadOutcome::from_code(code))
    }
}

/// Exit code, or `128 + signal` for a process killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}
