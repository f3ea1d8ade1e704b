//! Remote debugging option.

use crate::domain::detection::{self, ArgumentDetector};

use super::option::LaunchOption;

/// Whether the launched application accepts a remote debugger.
///
/// The default follows the current process: if it was itself started
/// with a debug agent, children are launched debuggable too. Choosing the
/// actual port is left to the process launcher unless one is pinned with
/// [`at_port`](Self::at_port).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoteDebugging {
    enabled: bool,
    suspend: bool,
    port: Option<u16>,
}

impl RemoteDebugging {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            suspend: false,
            port: None,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            suspend: false,
            port: None,
        }
    }

    /// Enabled iff the process-wide detector sees a debug agent.
    pub fn auto_detect() -> Self {
        Self::auto_detect_with(&detection::global())
    }

    /// Enabled iff `detector` sees a debug agent.
    pub fn auto_detect_with(detector: &ArgumentDetector) -> Self {
        if detector.should_enable_remote_debug() {
            Self::enabled()
        } else {
            Self::disabled()
        }
    }

    /// Pins the debug port.
    pub fn at_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Suspends the application until a debugger attaches.
    pub fn suspended(mut self) -> Self {
        self.suspend = true;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_suspended(&self) -> bool {
        self.suspend
    }

    /// The pinned port, only meaningful when enabled.
    pub fn port(&self) -> Option<u16> {
        self.port.filter(|_| self.enabled)
    }
}

impl LaunchOption for RemoteDebugging {
    fn default_value() -> Option<Self> {
        Some(Self::auto_detect())
    }
}
