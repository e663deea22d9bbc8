//! Application configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `reqcheck.json` in the workspace directory
//! 3. `REQCHECK_WORKSPACE` and `REQCHECK_TIMEOUT_SECS`
//! 4. command-line flags
//!
//! A missing config file means defaults. Relative paths resolve against
//! the workspace directory.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqcheck_domain::DISPLAY_LIMIT;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::adapters::DEFAULT_USER_AGENT;
use crate::serialization::{SerializationError, from_json_bytes};

/// Name of the config file looked up in the workspace directory.
pub const CONFIG_FILE: &str = "reqcheck.json";

/// Environment variable overriding the workspace directory.
pub const ENV_WORKSPACE: &str = "REQCHECK_WORKSPACE";

/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "REQCHECK_TIMEOUT_SECS";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error while reading the config file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid.
    #[error("Invalid config file: {0}")]
    Serialization(#[from] SerializationError),

    /// An environment variable holds an unusable value.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory every other path is relative to.
    pub workspace_dir: PathBuf,
    /// Store file holding templates and variables.
    pub store_file: PathBuf,
    /// Directory for history records.
    pub history_dir: PathBuf,
    /// Directory for `[filename]` variable targets.
    pub variables_dir: PathBuf,
    /// Per-request timeout.
    pub request_timeout_secs: u64,
    /// Characters of a response body shown before truncating.
    pub display_limit: usize,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace_dir: PathBuf::from("."),
            store_file: PathBuf::from("saved_requests.json"),
            history_dir: PathBuf::from("history"),
            variables_dir: PathBuf::from("variables"),
            request_timeout_secs: 30,
            display_limit: DISPLAY_LIMIT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Store file path.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.workspace_dir.join(&self.store_file)
    }

    /// History directory path.
    #[must_use]
    pub fn history_path(&self) -> PathBuf {
        self.workspace_dir.join(&self.history_dir)
    }

    /// Variables directory path.
    #[must_use]
    pub fn variables_path(&self) -> PathBuf {
        self.workspace_dir.join(&self.variables_dir)
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Values that override the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Workspace directory.
    pub workspace_dir: Option<PathBuf>,
    /// Request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Reads overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnv` if the timeout is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads overrides through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnv` if the timeout is not a number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let workspace_dir = lookup(ENV_WORKSPACE)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let request_timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(value) => Some(value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_TIMEOUT_SECS,
                value,
            })?),
            None => None,
        };

        Ok(Self {
            workspace_dir,
            request_timeout_secs,
        })
    }

    /// Layers `other` on top of `self`.
    #[must_use]
    pub fn overridden_by(self, other: Self) -> Self {
        Self {
            workspace_dir: other.workspace_dir.or(self.workspace_dir),
            request_timeout_secs: other.request_timeout_secs.or(self.request_timeout_secs),
        }
    }
}

/// Loads `AppConfig` from its sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Creates a new config loader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds the configuration.
    ///
    /// `env` and `cli` are applied in that order over the file in the
    /// workspace directory they select.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub async fn load(
        &self,
        env: ConfigOverrides,
        cli: ConfigOverrides,
    ) -> Result<AppConfig, ConfigError> {
        let overrides = env.overridden_by(cli);
        let workspace_dir = overrides
            .workspace_dir
            .unwrap_or_else(|| AppConfig::default().workspace_dir);

        let mut config = Self::read_file(&workspace_dir.join(CONFIG_FILE))
            .await?
            .unwrap_or_default();
        config.workspace_dir = workspace_dir;
        if let Some(secs) = overrides.request_timeout_secs {
            config.request_timeout_secs = secs;
        }

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
        match fs::read(path).await {
            Ok(content) => Ok(Some(from_json_bytes(&content)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::Io(e)),
        }
    }
}
