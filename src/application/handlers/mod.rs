//! Application handlers.

mod launch_application;

pub use launch_application::{
    CloseReport, LaunchApplicationCommand, LaunchApplicationHandler, ManagedApplication,
};
