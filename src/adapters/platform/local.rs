//! The local machine as a platform.

use crate::ports::{ApplicationConsole, Platform};

/// The machine the harness itself runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPlatform {
    name: String,
    address: String,
}

impl LocalPlatform {
    pub fn new() -> Self {
        Self {
            name: "local".to_string(),
            address: "127.0.0.1".to_string(),
        }
    }

    /// A local platform reachable under a different address, e.g. a
    /// non-loopback interface.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

impl Default for LocalPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for LocalPlatform {
    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self) -> &str {
        &self.address
    }
}

/// A console that discards all output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullConsole;

impl ApplicationConsole for NullConsole {
    fn name(&self) -> &str {
        "null"
    }
}
