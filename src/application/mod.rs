//! Application layer - Schemas and the launch handler.
//!
//! This layer orchestrates the domain model and the ports: it merges
//! options, runs profiles in lifecycle order, and hands the resulting
//! request to a `ProcessLauncher`.

pub mod handlers;
pub mod schema;

pub use handlers::{
    CloseReport, LaunchApplicationCommand, LaunchApplicationHandler, ManagedApplication,
};
pub use schema::{ApplicationFactory, JavaApplicationSchema, LaunchedProcess};
