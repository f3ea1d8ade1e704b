//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors that can occur while installing the subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("A global subscriber is already installed")]
    AlreadyInstalled,
}

/// Installs a global `fmt` subscriber filtered by `config.filter`.
///
/// `RUST_LOG` is not consulted; the configured filter is authoritative.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|_| TelemetryError::AlreadyInstalled)?;

    tracing::debug!(filter = %config.filter, json = config.json, "tracing initialized");
    Ok(())
}
