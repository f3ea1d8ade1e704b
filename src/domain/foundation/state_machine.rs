//! State machine trait for phase enums.
//!
//! Provides a consistent interface for validating and performing
//! transitions between lifecycle phases.

use super::LaunchError;
use super::LifecyclePhase;

/// Trait for enums that represent state machines.
///
/// Implementors define valid transitions and get a validated
/// `transition_to` for free.
///
/// # Example
///
/// ```ignore
/// let phase = LifecyclePhase::Unattached.transition_to(LifecyclePhase::Launching)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

impl LifecyclePhase {
    /// Performs a transition with validation, returning an error if the
    /// edge is not part of the lifecycle.
    pub fn transition_to(&self, target: LifecyclePhase) -> Result<LifecyclePhase, LaunchError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(LaunchError::InvalidTransition {
                from: *self,
                to: target,
            })
        }
    }
}
