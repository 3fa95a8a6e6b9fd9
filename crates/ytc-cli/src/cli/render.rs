//! Turns core notices into terminal messages.

use ytc_core::notice::{Level, Notice, Scope, StartSource};

const DRY_RUN: &str = "[--dry-run]:";

/// Message text for `notice`; `prog` is how the user invoked us, for remediation hints.
pub fn render(notice: &Notice, prog: &str) -> String {
    match notice {
        Notice::UrlAlreadyStored => {
            "You don't need to specify the playlist URL again; it's already stored.".to_owned()
        }
        Notice::UrlStored { url } => {
            format!("Stored playlist URL {}. You won't need to specify it again.", url)
        }
        Notice::WouldStoreUrl { url } => format!("{} Would store playlist URL: {}", DRY_RUN, url),
        Notice::ContinuingStored { url } => format!("Continuing stored playlist {}.", url),
        Notice::UrlMismatch { stored, supplied } => format!(
            "Playlist URL mismatch! Stored URL is '{}'.\n\
             If you want to update the URL, run:\n\
             {} --configure=local --url='{}'",
            stored, prog, supplied
        ),
        Notice::MissingUrl => "No playlist URL! Pass one with --url on the first run.".to_owned(),
        Notice::NegativeStart {
            start,
            source: StartSource::CommandLine,
        } => format!("Starting index {} is negative. Did you make a typo?", start),
        Notice::NegativeStart {
            start,
            source: StartSource::Stored,
        } => format!(
            "Starting index seems to have gone negative somehow ({}).\n\
             You can reset it with:\n\
             {} --configure=local --start 1",
            start, prog
        ),
        Notice::WouldExecute(cmd) => format!("{} Would execute: {}", DRY_RUN, cmd),
        Notice::LaunchFailed { reason } => format!("Could not run the downloader: {}", reason),
        Notice::NextStart { start, last_index } => format!(
            "Highest downloaded index is {}; next run starts at {}.",
            last_index, start
        ),
        Notice::CursorNotSaved { reason } => format!(
            "Could not update the resume position ({}). \
             Check {} before the next run.",
            reason,
            ytc_core::config::LOCAL_CONFIG_FILE
        ),
        Notice::NothingDownloaded => {
            "Nothing downloaded yet; keeping the stored start index.".to_owned()
        }
        Notice::ConfigChange {
            scope,
            key,
            from,
            to,
            dry_run,
        } => {
            let scope = match scope {
                Scope::Global => "Global",
                Scope::Local => "Local",
            };
            if *dry_run {
                format!("{} {} {} would change from '{}' to '{}'", DRY_RUN, scope, key, from, to)
            } else {
                format!("{} {} changed from '{}' to '{}'", scope, key, from, to)
            }
        }
    }
}

/// Prints notices in order: info to stdout, warnings and errors to stderr.
pub fn print_notices(notices: &[Notice], prog: &str) {
    for notice in notices {
        let msg = render(notice, prog);
        match notice.level() {
            Level::Info => println!("{}", msg),
            Level::Warn | Level::Error => eprintln!("{}", msg),
        }
    }
}
