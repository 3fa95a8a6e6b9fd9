//! Controller tests against a scripted downloader in a temp directory.

use super::*;
use crate::command::OUTPUT_TEMPLATE;
use crate::config::LOCAL_CONFIG_FILE;
use crate::downloader::stub::DownloaderStub;
use crate::notice::StartSource;

const URL: &str = "https://www.youtube.com/playlist?list=PL123";

struct Env {
    dir: tempfile::TempDir,
    store: ConfigStore,
}

impl Env {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(
            dir.path().join("xdg").join("config.toml"),
            dir.path().join(LOCAL_CONFIG_FILE),
        );
        Self { dir, store }
    }

    fn with_local(local: &LocalConfig) -> Self {
        let env = Self::new();
        env.store.save_local(local).unwrap();
        env
    }

    fn touch(&self, names: &[&str]) {
        for n in names {
            std::fs::write(self.dir.path().join(n), b"").unwrap();
        }
    }

    fn run(&self, stub: &DownloaderStub, req: &ResumeRequest, global: &GlobalConfig) -> RunReport {
        let local = self.store.load_local().unwrap();
        Controller::new(&self.store, stub, self.dir.path())
            .run(req, global, local)
            .unwrap()
    }

    fn stored(&self) -> LocalConfig {
        self.store.load_local().unwrap()
    }
}

fn stored_at(start: i64) -> LocalConfig {
    LocalConfig {
        url: URL.into(),
        start,
        ..LocalConfig::default()
    }
}

#[test]
fn success_advances_past_highest_index() {
    let env = Env::with_local(&stored_at(5));
    let stub = DownloaderStub::exiting(0, &[5, 6, 7, 8]);
    let report = env.run(&stub, &ResumeRequest::default(), &GlobalConfig::default());
    assert_eq!(report.status, RunStatus::Ok);
    assert_eq!(report.status.code(), 0);
    assert_eq!(env.stored().start, 9);
    assert_eq!(report.local.start, 9);
}

#[test]
fn failure_retries_highest_index() {
    let env = Env::with_local(&stored_at(5));
    let stub = DownloaderStub::exiting(1, &[5, 6, 7, 8]);
    let report = env.run(&stub, &ResumeRequest::default(), &GlobalConfig::default());
    assert_eq!(report.status, RunStatus::DownloaderFailed(1));
    assert_eq!(report.status.code(), 10_001);
    assert_eq!(env.stored().start, 8);
}

#[test]
fn start_beyond_disk_is_preserved() {
    let env = Env::with_local(&stored_at(50));
    env.touch(&["9-old.a.mp4", "10-old.b.mp4"]);
    let stub = DownloaderStub::exiting(0, &[]);
    let report = env.run(&stub, &ResumeRequest::default(), &GlobalConfig::default());
    assert_eq!(report.status, RunStatus::Ok);
    assert_eq!(env.stored().start, 50);
}

#[test]
fn empty_directory_leaves_cursor_alone() {
    let env = Env::with_local(&stored_at(4));
    let stub = DownloaderStub::exiting(1, &[]);
    let report = env.run(&stub, &ResumeRequest::default(), &GlobalConfig::default());
    assert_eq!(report.status, RunStatus::DownloaderFailed(1));
    assert_eq!(env.stored().start, 4);
    assert!(report.notices.contains(&Notice::NothingDownloaded));
}

#[test]
fn missing_url_invokes_nothing() {
    let env = Env::new();
    let stub = DownloaderStub::exiting(0, &[1]);
    let report = env.run(&stub, &ResumeRequest::default(), &GlobalConfig::default());
    assert_eq!(report.status, RunStatus::MissingUrl);
    assert_eq!(report.status.code(), crate::status::MISSING_URL);
    assert_eq!(stub.call_count(), 0);
    assert!(report.command.is_none());
    assert!(!env.store.local_path().exists());
}

#[test]
fn same_url_is_accepted_without_writes_before_run() {
    let env = Env::with_local(&stored_at(3));
    let before = env.stored();
    let stub = DownloaderStub::exiting(0, &[]);
    let req = ResumeRequest {
        url: Some(URL.into()),
        ..ResumeRequest::default()
    };
    let report = env.run(&stub, &req, &GlobalConfig::default());
    assert_eq!(report.status.code(), 0);
    assert_eq!(report.notices[0], Notice::UrlAlreadyStored);
    assert_eq!(env.stored(), before);
}

#[test]
fn changed_url_aborts_and_changes_nothing() {
    let env = Env::with_local(&stored_at(3));
    let before = std::fs::read_to_string(env.store.local_path()).unwrap();
    let stub = DownloaderStub::exiting(0, &[3]);
    let req = ResumeRequest {
        url: Some("https://www.youtube.com/playlist?list=OTHER".into()),
        ..ResumeRequest::default()
    };
    let report = env.run(&stub, &req, &GlobalConfig::default());
    assert_eq!(report.status, RunStatus::ChangedUrl);
    assert_eq!(report.status.code(), crate::status::CHANGED_URL);
    assert_eq!(stub.call_count(), 0);
    assert_eq!(std::fs::read_to_string(env.store.local_path()).unwrap(), before);
    assert!(matches!(
        &report.notices[0],
        Notice::UrlMismatch { stored, supplied } if stored == URL && supplied.ends_with("OTHER")
    ));
}

#[test]
fn new_url_is_stored_before_download() {
    let env = Env::new();
    let stub = DownloaderStub::exiting(1, &[]);
    let req = ResumeRequest {
        url: Some(URL.into()),
        ..ResumeRequest::default()
    };
    let report = env.run(&stub, &req, &GlobalConfig::default());
    assert_eq!(report.status, RunStatus::DownloaderFailed(1));
    assert_eq!(env.stored().url, URL);
    assert_eq!(env.stored().start, 1);
    assert!(report.notices.contains(&Notice::UrlStored { url: URL.into() }));
}

#[test]
fn stored_url_is_used() {
    let env = Env::with_local(&stored_at(2));
    let stub = DownloaderStub::exiting(0, &[2]);
    let report = env.run(&stub, &ResumeRequest::default(), &GlobalConfig::default());
    let calls = stub.calls.borrow();
    assert_eq!(calls[0].args.last().map(String::as_str), Some(URL));
    assert_eq!(report.notices[0], Notice::ContinuingStored { url: URL.into() });
}

#[test]
fn command_merges_three_tiers() {
    let env = Env::with_local(&LocalConfig {
        dl_args: "+-c".into(),
        ..stored_at(7)
    });
    let stub = DownloaderStub::exiting(0, &[]);
    let global = GlobalConfig {
        dl_args: "-w".into(),
        downloader: Some("yt-dlp".into()),
    };
    let req = ResumeRequest {
        dl_args: "+--max-quality=45".into(),
        ..ResumeRequest::default()
    };
    env.run(&stub, &req, &global);
    let calls = stub.calls.borrow();
    assert_eq!(calls[0].program, "yt-dlp");
    assert_eq!(
        calls[0].args,
        vec![
            "-w",
            "-c",
            "--max-quality=45",
            "--playlist-start=7",
            "-o",
            OUTPUT_TEMPLATE,
            URL
        ]
    );
}

#[test]
fn cli_start_overrides_stored() {
    let env = Env::with_local(&stored_at(2));
    let stub = DownloaderStub::exiting(0, &[20, 21]);
    let req = ResumeRequest {
        start: Some(20),
        ..ResumeRequest::default()
    };
    env.run(&stub, &req, &GlobalConfig::default());
    assert!(stub.calls.borrow()[0].args.contains(&"--playlist-start=20".to_string()));
    assert_eq!(env.stored().start, 22);
}

#[test]
fn zero_start_runs_from_one() {
    let env = Env::with_local(&stored_at(0));
    let stub = DownloaderStub::exiting(0, &[]);
    env.run(&stub, &ResumeRequest::default(), &GlobalConfig::default());
    assert!(stub.calls.borrow()[0].args.contains(&"--playlist-start=1".to_string()));
}

#[test]
fn negative_stored_start_warns_but_runs() {
    let env = Env::with_local(&stored_at(-3));
    let stub = DownloaderStub::exiting(0, &[]);
    let report = env.run(&stub, &ResumeRequest::default(), &GlobalConfig::default());
    assert_eq!(stub.call_count(), 1);
    assert!(stub.calls.borrow()[0].args.contains(&"--playlist-start=-3".to_string()));
    assert!(report.notices.contains(&Notice::NegativeStart {
        start: -3,
        source: StartSource::Stored
    }));
}

#[test]
fn dry_run_never_writes_or_invokes() {
    for local in [None, Some(stored_at(6)), Some(stored_at(-1))] {
        let env = match &local {
            Some(l) => Env::with_local(l),
            None => Env::new(),
        };
        env.touch(&["3-a.x.mp4"]);
        let before = std::fs::read(env.store.local_path()).ok();
        let stub = DownloaderStub::exiting(0, &[9]);
        let req = ResumeRequest {
            url: Some(URL.into()),
            start: Some(4),
            dry_run: true,
            ..ResumeRequest::default()
        };
        let report = env.run(&stub, &req, &GlobalConfig::default());
        assert_eq!(report.status, RunStatus::Ok);
        assert_eq!(stub.call_count(), 0);
        assert_eq!(std::fs::read(env.store.local_path()).ok(), before);
        assert!(matches!(report.notices.last(), Some(Notice::WouldExecute(_))));
    }
}

#[test]
fn dry_run_reports_url_it_would_store() {
    let env = Env::new();
    let stub = DownloaderStub::exiting(0, &[]);
    let req = ResumeRequest {
        url: Some(URL.into()),
        dry_run: true,
        ..ResumeRequest::default()
    };
    let report = env.run(&stub, &req, &GlobalConfig::default());
    assert_eq!(report.notices[0], Notice::WouldStoreUrl { url: URL.into() });
    assert!(!env.store.local_path().exists());
    assert_eq!(report.command.unwrap().args.last().map(String::as_str), Some(URL));
}

#[test]
fn launch_failure_skips_reconcile() {
    let env = Env::with_local(&stored_at(5));
    env.touch(&["9-a.x.mp4"]);
    let stub = DownloaderStub::missing();
    let report = env.run(&stub, &ResumeRequest::default(), &GlobalConfig::default());
    assert_eq!(report.status, RunStatus::LaunchFailed);
    assert_eq!(env.stored().start, 5);
    assert!(matches!(report.notices.last(), Some(Notice::LaunchFailed { .. })));
}

#[test]
fn unwritable_cursor_keeps_downloader_status() {
    let dir = tempfile::tempdir().unwrap();
    let local_path = dir.path().join("config-as-dir");
    std::fs::create_dir(&local_path).unwrap();
    let store = ConfigStore::new(dir.path().join("xdg").join("config.toml"), &local_path);
    let stub = DownloaderStub::exiting(1, &[5, 6, 7, 8]);

    let report = Controller::new(&store, &stub, dir.path())
        .run(&ResumeRequest::default(), &GlobalConfig::default(), stored_at(5))
        .unwrap();
    assert_eq!(report.status, RunStatus::DownloaderFailed(1));
    assert_eq!(report.status.code(), 10_001);
    assert_eq!(report.local.start, 5);
    assert!(matches!(report.notices.last(), Some(Notice::CursorNotSaved { .. })));
}

#[test]
fn failed_rescan_keeps_success_status() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("removed-playlist-dir");
    let store = ConfigStore::new(
        dir.path().join("xdg").join("config.toml"),
        gone.join(LOCAL_CONFIG_FILE),
    );
    let stub = DownloaderStub::exiting(0, &[]);

    let report = Controller::new(&store, &stub, &gone)
        .run(&ResumeRequest::default(), &GlobalConfig::default(), stored_at(3))
        .unwrap();
    assert_eq!(report.status, RunStatus::Ok);
    assert_eq!(stub.call_count(), 1);
    assert!(matches!(
        report.notices.last(),
        Some(Notice::CursorNotSaved { reason }) if reason.contains("read dir")
    ));
}
