use crate::error::{AskccError, Result};
use crate::paths;
use std::path::{Path, PathBuf};

/// Filesystem locations for a single invocation.
///
/// Built once at startup and passed by reference to every component that
/// touches disk, so tests can point everything at a temp directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root of askcc's own configuration (holds `templates/`).
    pub config_root: PathBuf,
    /// The user's home directory; OpenClaw state lives beneath it.
    pub home: PathBuf,
}

impl Settings {
    pub fn new(config_root: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            config_root: config_root.into(),
            home: home.into(),
        }
    }

    /// Resolve settings for this process.
    ///
    /// Priority for the config root:
    /// 1. `--config-root` flag / `ASKCC_HOME` env var (passed in as `explicit`)
    /// 2. `~/.askcc`
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let home = home::home_dir().ok_or(AskccError::HomeNotFound)?;
        let config_root = match explicit {
            Some(p) => p.to_path_buf(),
            None => paths::default_config_root(&home),
        };
        Ok(Self { config_root, home })
    }

    pub fn templates_dir(&self) -> PathBuf {
        paths::templates_dir(&self.config_root)
    }

    pub fn skills_dir(&self) -> PathBuf {
        paths::openclaw_skills_dir(&self.home)
    }

    pub fn openclaw_config_path(&self) -> PathBuf {
        paths::openclaw_config_path(&self.home)
    }
}
