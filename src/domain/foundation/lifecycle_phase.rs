//! LifecyclePhase enum for tracking an application through launch and close.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Phase of a single application's lifecycle.
///
/// Profiles are consulted once on each of the edges
/// `Unattached -> Launching`, `Launching -> Launched` and
/// `Launched -> Closing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    #[default]
    Unattached,
    Launching,
    Launched,
    Closing,
    Closed,
}

impl LifecyclePhase {
    /// Returns true while a live application handle exists.
    pub fn is_live(&self) -> bool {
        matches!(self, LifecyclePhase::Launched | LifecyclePhase::Closing)
    }
}

impl StateMachine for LifecyclePhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use LifecyclePhase::*;
        matches!(
            (self, target),
            (Unattached, Launching) | (Launching, Launched) | (Launched, Closing) | (Closing, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use LifecyclePhase::*;
        match self {
            Unattached => vec![Launching],
            Launching => vec![Launched],
            Launched => vec![Closing],
            Closing => vec![Closed],
            Closed => vec![],
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecyclePhase::Unattached => "Unattached",
            LifecyclePhase::Launching => "Launching",
            LifecyclePhase::Launched => "Launched",
            LifecyclePhase::Closing => "Closing",
            LifecyclePhase::Closed => "Closed",
        };
        write!(f, "{}", s)
    }
}
