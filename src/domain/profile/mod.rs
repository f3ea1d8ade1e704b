//! Profile module - Lifecycle extensions.
//!
//! This module defines:
//! - The `Profile` trait with its three lifecycle hooks
//! - `CommercialFeatures`, the built-in profile for commercial VM features

mod commercial_features;
#[allow(clippy::module_inception)]
mod profile;

pub use commercial_features::CommercialFeatures;
pub use profile::Profile;
