//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the lifecycle phase machine and the
//! error types that form the vocabulary of the launch domain.

mod errors;
mod ids;
mod lifecycle_phase;
mod state_machine;
mod timestamp;

pub use errors::{
    ApplicationError, DetectionError, LaunchError, ObservationFailure, OptionError, ProfileError,
};
pub use ids::LaunchId;
pub use lifecycle_phase::LifecyclePhase;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
