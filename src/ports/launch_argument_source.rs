//! LaunchArgumentSource port - Reads how the current process was started.

use crate::domain::foundation::DetectionError;

/// Source of the current process's launch arguments, in order.
///
/// This is the only read of the runtime environment the detector makes.
pub trait LaunchArgumentSource: Send + Sync {
    fn launch_arguments(&self) -> Result<Vec<String>, DetectionError>;
}
