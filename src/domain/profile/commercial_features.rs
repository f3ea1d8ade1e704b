//! CommercialFeatures profile.

use std::sync::Arc;

use crate::domain::detection::{self, ArgumentDetector, COMMERCIAL_FEATURES_MARKER};
use crate::domain::foundation::ProfileError;
use crate::domain::options::{Freeform, LaunchOption, OptionsByType};
use crate::ports::{MetaClass, Platform};

use super::Profile;

/// Enables or disables commercial features of the Java virtual machine.
///
/// When enabled, `-XX:+UnlockCommercialFeatures` is added to the launch.
/// The default follows the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommercialFeatures {
    enabled: bool,
}

impl CommercialFeatures {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Enabled iff the process-wide detector sees the unlock flag.
    pub fn auto_detect() -> Self {
        Self::auto_detect_with(&detection::global())
    }

    /// Enabled iff `detector` sees the unlock flag.
    ///
    /// Detection failures are logged by the detector and yield the
    /// disabled variant.
    pub fn auto_detect_with(detector: &ArgumentDetector) -> Self {
        if detector.should_enable_commercial_features() {
            Self::enabled()
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Profile for CommercialFeatures {
    fn name(&self) -> &str {
        "CommercialFeatures"
    }

    fn on_launching(
        &self,
        _platform: &dyn Platform,
        _meta_class: &dyn MetaClass,
        options: &mut OptionsByType,
    ) -> Result<(), ProfileError> {
        if self.enabled {
            tracing::debug!("unlocking commercial features");
            options.add(Freeform::new(COMMERCIAL_FEATURES_MARKER));
        }
        Ok(())
    }
}

impl LaunchOption for CommercialFeatures {
    fn default_value() -> Option<Self> {
        Some(Self::auto_detect())
    }

    fn as_profile(&self) -> Option<Arc<dyn Profile>> {
        Some(Arc::new(*self))
    }
}
