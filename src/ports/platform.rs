//! Platform port - Where an application is launched.

use std::fmt;

/// An abstraction over where a process runs: the local machine, a remote
/// host or a container.
///
/// Owned by the launch machinery; the core only borrows it while
/// resolving options and running profile hooks.
pub trait Platform: Send + Sync + fmt::Debug {
    /// Name of the platform, e.g. `local`.
    fn name(&self) -> &str;

    /// Host name or address other processes use to reach the platform.
    fn address(&self) -> &str;
}
