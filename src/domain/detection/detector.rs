//! ArgumentDetector - infers launch defaults from the current process.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::ports::LaunchArgumentSource;

/// Argument substring that turns on commercial VM features.
pub const COMMERCIAL_FEATURES_MARKER: &str = "-XX:+UnlockCommercialFeatures";

/// Argument substrings that indicate a debug agent.
pub const REMOTE_DEBUG_MARKERS: [&str; 2] = ["-agentlib:jdwp", "-Xrunjdwp"];

/// Substrings the detector looks for in launch arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionMarkers {
    pub commercial_features: String,
    pub remote_debug: Vec<String>,
}

impl Default for DetectionMarkers {
    fn default() -> Self {
        Self {
            commercial_features: COMMERCIAL_FEATURES_MARKER.to_string(),
            remote_debug: REMOTE_DEBUG_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Answers questions about how the current process was launched.
///
/// The argument list is read from the source once, on first use, and
/// cached for the detector's lifetime. Detection is best-effort: a failed
/// read is logged and treated as an empty argument list, so every query
/// falls back to its negative answer.
pub struct ArgumentDetector {
    source: Arc<dyn LaunchArgumentSource>,
    markers: DetectionMarkers,
    arguments: OnceCell<Vec<String>>,
}

impl ArgumentDetector {
    pub fn new(source: Arc<dyn LaunchArgumentSource>) -> Self {
        Self {
            source,
            markers: DetectionMarkers::default(),
            arguments: OnceCell::new(),
        }
    }

    pub fn with_markers(mut self, markers: DetectionMarkers) -> Self {
        self.markers = markers;
        self
    }

    pub fn markers(&self) -> &DetectionMarkers {
        &self.markers
    }

    /// The launch arguments of the current process, read at most once.
    pub fn arguments(&self) -> &[String] {
        self.arguments.get_or_init(|| match self.source.launch_arguments() {
            Ok(arguments) => {
                tracing::debug!(count = arguments.len(), "read launch arguments");
                arguments
            }
            Err(err) => {
                tracing::error!("Error trying to read launch arguments - {}", err);
                Vec::new()
            }
        })
    }

    pub fn has_argument_containing(&self, marker: &str) -> bool {
        self.arguments().iter().any(|arg| arg.contains(marker))
    }

    /// Was this process started with commercial VM features unlocked?
    pub fn should_enable_commercial_features(&self) -> bool {
        self.has_argument_containing(&self.markers.commercial_features)
    }

    /// Was this process started with a debug agent?
    pub fn should_enable_remote_debug(&self) -> bool {
        self.markers
            .remote_debug
            .iter()
            .any(|marker| self.has_argument_containing(marker))
    }
}

impl fmt::Debug for ArgumentDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentDetector")
            .field("markers", &self.markers)
            .field("arguments", &self.arguments.get())
            .finish()
    }
}
