//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Could not read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Detection marker '{0}' must not be empty")]
    EmptyMarker(&'static str),

    #[error("At least one remote debug marker is required")]
    NoRemoteDebugMarkers,

    #[error("Tool options variable name must not be empty")]
    EmptyToolOptionsVariable,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
