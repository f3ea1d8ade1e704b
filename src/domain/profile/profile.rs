//! Profile trait for lifecycle extensions.

use std::fmt;

use crate::domain::foundation::ProfileError;
use crate::domain::options::OptionsByType;
use crate::ports::{Application, MetaClass, Platform};

/// An extension consulted at three points in an application's life.
///
/// Profiles are registered as options, so independently written profiles
/// compose simply by being added to the same `OptionsByType`. Hooks must
/// not touch anything other than the values they are passed.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct GcLogging;
///
/// impl Profile for GcLogging {
///     fn name(&self) -> &str { "GcLogging" }
///
///     fn on_launching(&self, _: &dyn Platform, _: &dyn MetaClass, options: &mut OptionsByType)
///         -> Result<(), ProfileError>
///     {
///         options.add(Freeform::new("-Xlog:gc"));
///         Ok(())
///     }
/// }
///
/// impl LaunchOption for GcLogging {
///     fn as_profile(&self) -> Option<Arc<dyn Profile>> {
///         Some(Arc::new(self.clone()))
///     }
/// }
/// ```
pub trait Profile: Send + Sync + fmt::Debug {
    /// Name used in logs and failure reports.
    fn name(&self) -> &str;

    /// Runs before the process is started. May add or replace options.
    ///
    /// An error aborts the launch.
    fn on_launching(
        &self,
        platform: &dyn Platform,
        meta_class: &dyn MetaClass,
        options: &mut OptionsByType,
    ) -> Result<(), ProfileError>;

    /// Runs right after the application was created. The launch has
    /// already happened, so changes to options only record facts.
    ///
    /// An error is reported but does not undo the launch.
    fn on_launched(
        &self,
        _platform: &dyn Platform,
        _application: &dyn Application,
        _options: &mut OptionsByType,
    ) -> Result<(), ProfileError> {
        Ok(())
    }

    /// Runs before the application is closed.
    ///
    /// An error is reported but does not stop the close.
    fn on_closing(
        &self,
        _platform: &dyn Platform,
        _application: &dyn Application,
        _options: &mut OptionsByType,
    ) -> Result<(), ProfileError> {
        Ok(())
    }
}
