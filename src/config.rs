use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default prefix of release tags in `git ls-remote --tags` output
pub const DEFAULT_TAG_PREFIX: &str = "refs/tags/";

/// Default log level when neither config nor RUST_LOG sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub git: GitConfig,
    pub prefix: String,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git: GitConfig::default(),
            prefix: DEFAULT_TAG_PREFIX.to_string(),
            log: LogConfig::default(),
        }
    }
}

/// Git-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GitConfig {
    /// Path or name of the git executable
    pub binary: PathBuf,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("git"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
    /// Write logs to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
            file: None,
        }
    }
}

impl Config {
    /// Load the configuration file.
    ///
    /// With an explicit `path` the file must exist. Otherwise the default
    /// location is used and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    debug!("No config file at {:?}, using defaults", path);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the config directory for latest-tag.
/// Uses $XDG_CONFIG_HOME/latest-tag if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/latest-tag,
/// or ./latest-tag if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("latest-tag")
}
