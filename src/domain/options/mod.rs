//! Options module - Typed launch configuration.
//!
//! This module defines:
//! - The `LaunchOption` trait every configuration fact implements
//! - `OptionsByType`, the type-indexed registry with default resolution
//! - The built-in option kinds (freeform flags, Java entry point,
//!   remote debugging, system properties, environment variables)

mod freeform;
mod java;
mod option;
mod properties;
mod registry;
mod remote_debugging;

pub use freeform::Freeform;
pub use java::{ClassName, ClassPath, DisplayName, Executable};
pub use option::{ErasedOption, LaunchOption, Multiplicity, OptionKind};
pub use properties::{
    EnvironmentVariables, PlatformAware, Properties, PropertyValue, SystemProperties,
};
pub use registry::OptionsByType;
pub use remote_debugging::RemoteDebugging;
