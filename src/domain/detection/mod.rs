//! Detection module - Environment auto-detection.
//!
//! Profiles and options ask the detector how the current process was
//! launched to pick their defaults. A single detector is shared
//! process-wide through [`global`]; tests substitute one with [`install`].

mod detector;
mod global;

pub use detector::{
    ArgumentDetector, DetectionMarkers, COMMERCIAL_FEATURES_MARKER, REMOTE_DEBUG_MARKERS,
};
pub use global::{global, install, DetectorGuard};
