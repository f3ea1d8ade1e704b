//! Launch Profiles - Typed launch configuration for Java applications
//!
//! This crate models the options an application is launched with as a
//! registry keyed by option type, and lets independently written profiles
//! take part in the launch, post-launch and close of every application.
//!
//! # Architecture
//!
//! - `domain` - Options registry, profiles, lifecycle phases, auto-detection
//! - `ports` - Platforms, applications and the process launcher
//! - `adapters` - Process argument sources, local platform, in-memory launcher
//! - `application` - Schemas and the launch handler
//! - `config` - Environment-driven harness configuration
//! - `telemetry` - Tracing subscriber setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
