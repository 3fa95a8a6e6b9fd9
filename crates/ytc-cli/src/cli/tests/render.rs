//! Terminal messages for notices.

use crate::cli::render::render;
use ytc_core::command::DownloadCommand;
use ytc_core::notice::{Notice, Scope, StartSource};

#[test]
fn mismatch_shows_reconfigure_command() {
    let msg = render(
        &Notice::UrlMismatch {
            stored: "https://example.com/a".into(),
            supplied: "https://example.com/b".into(),
        },
        "ytc",
    );
    assert!(msg.contains("mismatch"));
    assert!(msg.ends_with("ytc --configure=local --url='https://example.com/b'"));
}

#[test]
fn negative_start_hint_depends_on_source() {
    let typo = render(
        &Notice::NegativeStart {
            start: -1,
            source: StartSource::CommandLine,
        },
        "ytc",
    );
    assert!(typo.contains("typo"));

    let stored = render(
        &Notice::NegativeStart {
            start: -1,
            source: StartSource::Stored,
        },
        "/usr/bin/ytc",
    );
    assert!(stored.ends_with("/usr/bin/ytc --configure=local --start 1"));
}

#[test]
fn dry_run_execute_lists_command() {
    let cmd = DownloadCommand::build("youtube-dl", "-w", 4, "https://example.com/l");
    let msg = render(&Notice::WouldExecute(cmd), "ytc");
    assert!(msg.starts_with("[--dry-run]: Would execute: youtube-dl -w --playlist-start=4 -o "));
    assert!(msg.ends_with(" https://example.com/l"));
}

#[test]
fn config_change_applied_and_dry_run() {
    let change = |dry_run| Notice::ConfigChange {
        scope: Scope::Global,
        key: "dl-args",
        from: "-w".into(),
        to: "-f best".into(),
        dry_run,
    };
    assert_eq!(
        render(&change(true), "ytc"),
        "[--dry-run]: Global dl-args would change from '-w' to '-f best'"
    );
    assert_eq!(
        render(&change(false), "ytc"),
        "Global dl-args changed from '-w' to '-f best'"
    );
}

#[test]
fn cursor_not_saved_names_local_config() {
    let msg = render(
        &Notice::CursorNotSaved {
            reason: "replace config: ./ytc.toml: Is a directory".into(),
        },
        "ytc",
    );
    assert!(msg.starts_with("Could not update the resume position (replace config"));
    assert!(msg.contains("ytc.toml"));
}
