//! Domain layer containing the launch configuration model.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, lifecycle phases, errors)
//! - `options` - Typed launch options and the `OptionsByType` registry
//! - `profile` - Lifecycle extensions and the built-in profiles
//! - `detection` - Environment auto-detection and its process-wide instance

pub mod detection;
pub mod foundation;
pub mod options;
pub mod profile;
