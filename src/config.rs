use crate::error::{BzrError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_BZR: &str = "BZRWRAPPER_BZR";
pub const ENV_TIMEOUT: &str = "BZRWRAPPER_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Executable invoked for every bzr command
    pub bzr_path: PathBuf,
    /// Seconds a single bzr command may run before it is killed
    pub timeout_secs: u64,
    /// Print the log oldest first
    pub forward: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bzr_path: PathBuf::from("bzr"),
            timeout_secs: 30,
            forward: true,
        }
    }
}

impl Config {
    /// `<config dir>/bzrwrapper/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bzrwrapper").join("config.toml"))
    }

    /// Loads the config file if there is one, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);

        let config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        config.with_env_overrides()
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| BzrError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(bzr) = std::env::var(ENV_BZR) {
            self.bzr_path = PathBuf::from(bzr);
        }
        if let Ok(timeout) = std::env::var(ENV_TIMEOUT) {
            self.timeout_secs = timeout.trim().parse().map_err(|_| {
                BzrError::ConfigError(format!(
                    "{} must be a number of seconds, got {:?}",
                    ENV_TIMEOUT, timeout
                ))
            })?;
        }
        if self.timeout_secs == 0 {
            return Err(BzrError::ConfigError(
                "timeout_secs must be at least one second".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
