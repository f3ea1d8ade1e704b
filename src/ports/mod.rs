//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the launch core and the machinery it does not own. Adapters implement
//! these ports.
//!
//! ## Runtime Handles
//!
//! - `Platform` - Where a process is launched
//! - `Application` - A launched application, as seen by profiles
//! - `ApplicationConsole` - Where its standard streams go
//! - `ProcessHandle` - The raw process behind an application
//! - `MetaClass` - Type information about the application being launched
//!
//! ## Machinery
//!
//! - `ProcessLauncher` - Starts processes from a `LaunchRequest`
//! - `LaunchArgumentSource` - Reads the current process's launch arguments

mod application;
mod launch_argument_source;
mod meta_class;
mod platform;
mod process_launcher;

pub use application::{Application, ApplicationConsole, ProcessHandle};
pub use launch_argument_source::LaunchArgumentSource;
pub use meta_class::MetaClass;
pub use platform::Platform;
pub use process_launcher::{LaunchRequest, ProcessLauncher};
