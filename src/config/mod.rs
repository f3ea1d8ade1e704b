//! Harness configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LAUNCH_PROFILES` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use launch_profiles::config::HarnessConfig;
//!
//! let config = HarnessConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let detector = config.detection.build_detector();
//! let _guard = launch_profiles::domain::detection::install(detector);
//! ```

mod detection;
mod error;
mod logging;
mod profiles;

pub use detection::DetectionConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use profiles::ProfileSettings;

use std::path::Path;

use serde::Deserialize;

/// Root harness configuration
///
/// Load using [`HarnessConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarnessConfig {
    /// Launch argument inspection (markers, tool options variable)
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Overrides for built-in profiles
    #[serde(default)]
    pub profiles: ProfileSettings,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HarnessConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LAUNCH_PROFILES` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LAUNCH_PROFILES__LOGGING__FILTER=debug` -> `logging.filter = debug`
    /// - `LAUNCH_PROFILES__PROFILES__COMMERCIAL_FEATURES=false` -> `profiles.commercial_features = Some(false)`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();
        Self::from_environment()
    }

    /// Like [`load`](Self::load), but reads the given env file, which must exist.
    ///
    /// Variables already set in the environment take precedence over the file.
    pub fn load_from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::from_path(path.as_ref())?;
        Self::from_environment()
    }

    fn from_environment() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LAUNCH_PROFILES")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.detection.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
