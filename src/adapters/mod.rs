//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the launch core to its environment:
//! - `runtime` - Sources of the current process's launch arguments
//! - `platform` - The local platform, consoles and platform-aware values
//! - `launcher` - Process launcher implementations

pub mod launcher;
pub mod platform;
pub mod runtime;

pub use launcher::{InMemoryProcess, InMemoryProcessLauncher};
pub use platform::{LocalPlatform, NullConsole, PlatformAddress};
pub use runtime::{ProcessLaunchArguments, StaticLaunchArguments, JAVA_TOOL_OPTIONS};
