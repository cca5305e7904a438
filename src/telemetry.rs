//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "TASKORY_LOG";

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        /// The rejected directive.
        filter: String,
        /// Parser failure.
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error("failed to initialize tracing subscriber: {0}")]
    Install(String),
}

/// Builds the filter from `TASKORY_LOG`, falling back to the configured
/// directive.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the configured directive
/// does not parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.filter).map_err(|source| TelemetryError::InvalidFilter {
        filter: config.filter.clone(),
        source,
    })
}

/// Installs a formatted subscriber as the global default.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| TelemetryError::Install(error.to_string()))
}
