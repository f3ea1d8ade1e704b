//! ProcessLauncher port - Interface to the process-spawning machinery.
//!
//! The core never starts processes itself. Once profiles have finished
//! configuring a launch, the resolved options are exported into a
//! [`LaunchRequest`] and handed to a `ProcessLauncher`.
//!
//! ## Argument Order
//!
//! 1. Freeform flags, in the order they were added
//! 2. `-Dname=value` for each system property, in registration order
//! 3. `-cp <class path>` when a class path is configured
//! 4. The main class name

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LaunchError;
use crate::domain::options::Properties;

use super::{Platform, ProcessHandle};

/// Everything the launcher needs to start one process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRequest {
    /// Name the application is launched under
    pub name: String,

    /// Program to execute
    pub executable: String,

    /// Arguments, in the order they must be passed
    pub arguments: Vec<String>,

    /// Environment of the new process
    pub environment_variables: Properties,

    /// System properties after platform resolution
    pub system_properties: Properties,

    /// Whether a debug agent should be attached
    pub remote_debug: bool,

    /// Debug port pinned by the caller; `None` lets the launcher choose
    pub remote_debug_port: Option<u16>,
}

impl LaunchRequest {
    /// Counts how many arguments are exactly `argument`.
    pub fn count_argument(&self, argument: &str) -> usize {
        self.arguments.iter().filter(|arg| *arg == argument).count()
    }
}

/// Port for starting processes on a platform.
pub trait ProcessLauncher: Send + Sync {
    /// Starts the process described by `request` on `platform`.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::Spawn` if the process could not be started.
    fn spawn(
        &self,
        platform: &dyn Platform,
        request: &LaunchRequest,
    ) -> Result<Box<dyn ProcessHandle>, LaunchError>;
}
