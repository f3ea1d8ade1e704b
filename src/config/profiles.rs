//! Profile configuration

use serde::Deserialize;

use crate::domain::detection::ArgumentDetector;
use crate::domain::profile::CommercialFeatures;

/// Overrides for the built-in profiles
///
/// An unset field leaves the choice to auto-detection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSettings {
    /// Force commercial features on or off for launched applications
    #[serde(default)]
    pub commercial_features: Option<bool>,
}

impl ProfileSettings {
    /// The commercial features profile to use, detected unless overridden.
    pub fn commercial_features_profile(&self, detector: &ArgumentDetector) -> CommercialFeatures {
        match self.commercial_features {
            Some(true) => CommercialFeatures::enabled(),
            Some(false) => CommercialFeatures::disabled(),
            None => CommercialFeatures::auto_detect_with(detector),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticLaunchArguments;
    use std::sync::Arc;

    fn detector_with_flag() -> ArgumentDetector {
        ArgumentDetector::new(Arc::new(StaticLaunchArguments::new([
            "-XX:+UnlockCommercialFeatures",
        ])))
    }

    #[test]
    fn unset_override_follows_detector() {
        let settings = ProfileSettings::default();
        assert!(settings
            .commercial_features_profile(&detector_with_flag())
            .is_enabled());
    }

    #[test]
    fn override_wins_over_detector() {
        let settings = ProfileSettings {
            commercial_features: Some(false),
        };
        assert!(!settings
            .commercial_features_profile(&detector_with_flag())
            .is_enabled());
    }
}
