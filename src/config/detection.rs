//! Detection configuration

use std::sync::Arc;

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::{ProcessLaunchArguments, JAVA_TOOL_OPTIONS};
use crate::domain::detection::{
    ArgumentDetector, DetectionMarkers, COMMERCIAL_FEATURES_MARKER, REMOTE_DEBUG_MARKERS,
};

/// How the current process's launch arguments are inspected
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    /// Substring that turns commercial features on
    #[serde(default = "default_commercial_features_marker")]
    pub commercial_features_marker: String,

    /// Substrings that turn remote debugging on (comma-separated)
    #[serde(default = "default_remote_debug_markers")]
    pub remote_debug_markers: String,

    /// Environment variable holding extra VM options
    #[serde(default = "default_tool_options_variable")]
    pub tool_options_variable: Option<String>,
}

impl DetectionConfig {
    /// Get remote debug markers as a vector
    pub fn remote_debug_markers_list(&self) -> Vec<String> {
        self.remote_debug_markers
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn markers(&self) -> DetectionMarkers {
        DetectionMarkers {
            commercial_features: self.commercial_features_marker.clone(),
            remote_debug: self.remote_debug_markers_list(),
        }
    }

    /// Builds a detector over the current process using these markers.
    pub fn build_detector(&self) -> ArgumentDetector {
        let source = ProcessLaunchArguments::new()
            .with_tool_options_variable(self.tool_options_variable.clone());
        ArgumentDetector::new(Arc::new(source)).with_markers(self.markers())
    }

    /// Validate detection configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.commercial_features_marker.trim().is_empty() {
            return Err(ValidationError::EmptyMarker("commercial_features_marker"));
        }
        if self.remote_debug_markers_list().is_empty() {
            return Err(ValidationError::NoRemoteDebugMarkers);
        }
        if matches!(&self.tool_options_variable, Some(name) if name.trim().is_empty()) {
            return Err(ValidationError::EmptyToolOptionsVariable);
        }
        Ok(())
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            commercial_features_marker: default_commercial_features_marker(),
            remote_debug_markers: default_remote_debug_markers(),
            tool_options_variable: default_tool_options_variable(),
        }
    }
}

fn default_commercial_features_marker() -> String {
    COMMERCIAL_FEATURES_MARKER.to_string()
}

fn default_remote_debug_markers() -> String {
    REMOTE_DEBUG_MARKERS.join(",")
}

fn default_tool_options_variable() -> Option<String> {
    Some(JAVA_TOOL_OPTIONS.to_string())
}
