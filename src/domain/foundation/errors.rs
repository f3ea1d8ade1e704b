//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::{LifecyclePhase, Timestamp};

/// Errors raised while inspecting the current execution environment.
///
/// Always recovered where it occurs: callers downgrade to the conservative
/// answer and log the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    #[error("Launch arguments unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by the option registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The kind holds no value and declares no default provider.
    #[error("Option '{kind}' is not configured and has no default")]
    NotConfigured { kind: &'static str },
}

impl OptionError {
    /// Creates a not-configured error for the given option kind.
    pub fn not_configured(kind: &'static str) -> Self {
        OptionError::NotConfigured { kind }
    }
}

/// Errors returned by a profile lifecycle hook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Profile rejected the launch: {0}")]
    Rejected(String),

    #[error("Profile requires option '{kind}' which is not configured")]
    MissingOption { kind: &'static str },

    #[error("Profile failed: {0}")]
    Failed(String),
}

impl From<OptionError> for ProfileError {
    fn from(err: OptionError) -> Self {
        match err {
            OptionError::NotConfigured { kind } => ProfileError::MissingOption { kind },
        }
    }
}

/// Errors that abort a launch attempt.
///
/// When any of these is returned no application handle exists.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Profile '{profile}' failed while configuring the launch: {source}")]
    Configuration {
        profile: String,
        #[source]
        source: ProfileError,
    },

    #[error(transparent)]
    NotConfigured(#[from] OptionError),

    #[error("Process could not be started: {0}")]
    Spawn(String),

    #[error("Application kind '{kind}' cannot be created on platform '{platform}'")]
    Unsupported { kind: String, platform: String },

    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition {
        from: LifecyclePhase,
        to: LifecyclePhase,
    },
}

impl LaunchError {
    /// Creates a configuration error for a failing profile.
    pub fn configuration(profile: impl Into<String>, source: ProfileError) -> Self {
        LaunchError::Configuration {
            profile: profile.into(),
            source,
        }
    }

    /// Creates a spawn error.
    pub fn spawn(reason: impl Into<String>) -> Self {
        LaunchError::Spawn(reason.into())
    }
}

/// Errors reported by an application while it is being closed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("Application '{name}' failed to close: {reason}")]
    CloseFailed { name: String, reason: String },

    #[error("Process {pid} could not be terminated: {reason}")]
    TerminateFailed { pid: u32, reason: String },
}

/// A failure in `on_launched` or `on_closing`.
///
/// These are reported and collected but never unwind a completed transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationFailure {
    pub profile: String,
    pub phase: LifecyclePhase,
    pub message: String,
    pub occurred_at: Timestamp,
}

impl ObservationFailure {
    /// Records a failure raised by `profile` while entering `phase`.
    pub fn new(profile: impl Into<String>, phase: LifecyclePhase, error: &ProfileError) -> Self {
        Self {
            profile: profile.into(),
            phase,
            message: error.to_string(),
            occurred_at: Timestamp::now(),
        }
    }
}

impl fmt::Display for ObservationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.phase, self.profile, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_displays_kind() {
        let err = OptionError::not_configured("ClassPath");
        assert_eq!(
            format!("{}", err),
            "Option 'ClassPath' is not configured and has no default"
        );
    }

    #[test]
    fn option_error_converts_to_missing_option() {
        let err: ProfileError = OptionError::not_configured("Executable").into();
        assert_eq!(err, ProfileError::MissingOption { kind: "Executable" });
    }

    #[test]
    fn configuration_error_names_profile_and_cause() {
        let err = LaunchError::configuration(
            "CommercialFeatures",
            ProfileError::Rejected("license missing".to_string()),
        );
        assert_eq!(
            format!("{}", err),
            "Profile 'CommercialFeatures' failed while configuring the launch: \
             Profile rejected the launch: license missing"
        );
    }

    #[test]
    fn launch_error_wraps_option_error_transparently() {
        let err: LaunchError = OptionError::not_configured("ClassName").into();
        assert_eq!(
            format!("{}", err),
            "Option 'ClassName' is not configured and has no default"
        );
    }

    #[test]
    fn detection_error_displays_reason() {
        let err = DetectionError::Unavailable("no runtime".to_string());
        assert_eq!(format!("{}", err), "Launch arguments unavailable: no runtime");
    }

    #[test]
    fn observation_failure_displays_phase_and_profile() {
        let failure = ObservationFailure::new(
            "Recorder",
            LifecyclePhase::Launched,
            &ProfileError::Failed("disk full".to_string()),
        );
        assert_eq!(
            format!("{}", failure),
            "[Launched] Recorder: Profile failed: disk full"
        );
    }
}
