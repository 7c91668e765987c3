//! Configuration for the resource cache.
//!
//! Settings live in a small TOML file in the platform config directory and
//! can be overridden by environment variables:
//!
//! - `RESC_CONFIG` — explicit path to the config file
//! - `RESC_CACHE_DIR` — overrides `paths.cache_root`
//!
//! With no file and no overrides, the defaults reproduce the historical
//! behavior: a `resource_cache` directory relative to the working directory
//! and a 30 second fetch timeout.
//!
//! ```toml
//! [paths]
//! cache_root = "/var/lib/resc/resource_cache"
//!
//! [fetch]
//! timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Error, Result};

/// Default cache root, relative to the process working directory.
pub const DEFAULT_CACHE_ROOT: &str = "resource_cache";

/// Default fetch timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Global configuration for resc.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File system paths configuration.
    pub paths: PathsConfig,
    /// Remote retrieval configuration.
    pub fetch: FetchConfig,
}

/// File system paths configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory cache entries are stored under.
    ///
    /// Relative paths are resolved against the working directory at the
    /// time a [`crate::ResourceCache`] first persists an entry.
    pub cache_root: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            cache_root: PathBuf::from(DEFAULT_CACHE_ROOT),
        }
    }
}

/// Remote retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds for a single retrieval.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Loads configuration from the default location, or returns defaults
    /// when no config file exists.
    ///
    /// `RESC_CACHE_DIR`, when set and non-empty, wins over the file value
    /// for the cache root.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_file() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };

        if let Some(root) = cache_root_override() {
            config.paths.cache_root = root;
        }

        Ok(config)
    }

    /// Loads configuration from an explicit file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {e}")))?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to the default location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file()
            .ok_or_else(|| Error::Config("Failed to determine configuration directory".into()))?;
        self.save_to(&path)
    }

    /// Saves configuration to an explicit file path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }
        let toml = toml::to_string_pretty(self)?;
        fs::write(path, toml).map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }

    /// The fetch timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout_secs)
    }

    /// Resolves the config file path, honoring the `RESC_CONFIG` override.
    ///
    /// `None` when no home directory can be determined; [`Config::load`]
    /// treats that as "no config file".
    fn config_file() -> Option<PathBuf> {
        if let Ok(explicit) = std::env::var("RESC_CONFIG") {
            let trimmed = explicit.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }

        directories::ProjectDirs::from("dev", "resc", "resc")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Reads the `RESC_CACHE_DIR` override, ignoring empty values.
fn cache_root_override() -> Option<PathBuf> {
    std::env::var("RESC_CACHE_DIR")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
