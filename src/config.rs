//! Layered configuration loading using figment.
//!
//! Configuration sources, highest priority first:
//!
//! 1. Environment variables with the `TASKORY_` prefix, `__` separating
//!    sections (`TASKORY_DATABASE__URL` maps to `database.url`)
//! 2. A TOML file (`taskory.toml` in the working directory, or an explicit
//!    path)
//! 3. Built-in defaults

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "TASKORY_";

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "taskory.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// A configuration field has an invalid value.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    #[serde(default)]
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection.
    #[serde(default = "default_connection_timeout_secs")]
    pub connection_timeout_secs: u64,
}

const fn default_max_connections() -> u32 {
    10
}

const fn default_connection_timeout_secs() -> u64 {
    30
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            connection_timeout_secs: default_connection_timeout_secs(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, e.g. `taskory=debug`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_owned()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskoryConfig {
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TaskoryConfig {
    /// Loads configuration from defaults, `taskory.toml`, and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be parsed or the merged
    /// values are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Loads configuration using `path` as the TOML layer.
    ///
    /// A missing file is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be parsed or the merged
    /// values are invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the provider chain without extracting it.
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if path.exists() {
            figment = figment.merge(Toml::file(PathBuf::from(path)));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks values that deserialisation alone cannot reject.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty database URL or a
    /// zero-sized pool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.url",
                reason: "must not be empty",
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
