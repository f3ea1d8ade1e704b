//! Runtime adapters.
//!
//! Implementations of `LaunchArgumentSource`:
//!
//! - `ProcessLaunchArguments` - The current process's real arguments
//! - `StaticLaunchArguments` - Fixed arguments or a fixed failure, for tests

mod process_arguments;
mod static_arguments;

pub use process_arguments::{ProcessLaunchArguments, JAVA_TOOL_OPTIONS};
pub use static_arguments::StaticLaunchArguments;
