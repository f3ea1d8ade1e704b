//! Application ports - Handles to launched processes.

use std::fmt;

use crate::domain::foundation::ApplicationError;

/// A running application, as produced by an application factory.
pub trait Application: Send + Sync {
    /// Name under which the application was launched.
    fn name(&self) -> &str;

    /// Operating system id of the underlying process, if known.
    fn process_id(&self) -> Option<u32>;

    /// Terminates the application.
    fn close(&mut self) -> Result<(), ApplicationError>;
}

/// Destination for the application's standard streams.
pub trait ApplicationConsole: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;
}

/// The raw process started by a [`ProcessLauncher`](super::ProcessLauncher).
pub trait ProcessHandle: Send + Sync + fmt::Debug {
    fn id(&self) -> u32;

    fn terminate(&mut self) -> Result<(), ApplicationError>;
}
