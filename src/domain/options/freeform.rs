//! Freeform launch arguments passed through to the process verbatim.

use std::fmt;

use super::option::{LaunchOption, Multiplicity};

/// A single free-form argument, e.g. `-XX:+UseG1GC`.
///
/// Collected: every added flag is kept, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Freeform(String);

impl Freeform {
    pub fn new(argument: impl Into<String>) -> Self {
        Self(argument.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl LaunchOption for Freeform {
    const MULTIPLICITY: Multiplicity = Multiplicity::Collected;
}

impl fmt::Display for Freeform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Freeform {
    fn from(argument: &str) -> Self {
        Self::new(argument)
    }
}
