//! Load and persist configuration records.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{ConfigFile, GlobalConfig, LocalConfig};

/// File name of the global config under `$XDG_CONFIG_HOME/ytc/`.
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";
/// File name of the local config inside the playlist directory.
pub const LOCAL_CONFIG_FILE: &str = "ytc.toml";

/// Where the two configuration scopes are read from and written to.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    global_path: PathBuf,
    local_path: PathBuf,
}

impl ConfigStore {
    pub fn new(global_path: impl Into<PathBuf>, local_path: impl Into<PathBuf>) -> Self {
        Self {
            global_path: global_path.into(),
            local_path: local_path.into(),
        }
    }

    /// Global config under `~/.config/ytc/config.toml`, local config in `workdir`.
    pub fn open_default(workdir: &Path) -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::new()?;
        let global_path = xdg_dirs.get_config_home().join("ytc").join(GLOBAL_CONFIG_FILE);
        Ok(Self::new(global_path, workdir.join(LOCAL_CONFIG_FILE)))
    }

    pub fn global_path(&self) -> &Path {
        &self.global_path
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn load_global(&self) -> Result<GlobalConfig> {
        read_section(&self.global_path)
    }

    pub fn load_local(&self) -> Result<LocalConfig> {
        read_section(&self.local_path)
    }

    pub fn save_global(&self, cfg: &GlobalConfig) -> Result<()> {
        write_section(&self.global_path, cfg)
    }

    pub fn save_local(&self, cfg: &LocalConfig) -> Result<()> {
        write_section(&self.local_path, cfg)
    }
}

/// Reads the `[main]` table of `path`. A missing file yields the defaults.
fn read_section<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(T::default());
        }
        Err(e) => return Err(e).with_context(|| format!("read config: {}", path.display())),
    };
    let file: ConfigFile<T> =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(file.main)
}

/// Writes `[main]` to a temp file next to `path`, then renames it into place.
fn write_section<T: Serialize>(path: &Path, cfg: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("create dir: {}", dir.display()))?;

    let toml = toml::to_string_pretty(&ConfigFile { main: cfg }).context("serialize config")?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(toml.as_bytes())
        .with_context(|| format!("write temp config for {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("sync temp config for {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("replace config: {}", path.display()))?;

    tracing::debug!("wrote config {}", path.display());
    Ok(())
}
