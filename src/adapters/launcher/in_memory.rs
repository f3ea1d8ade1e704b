//! In-memory process launcher for testing.
//!
//! Records every launch request instead of starting a process.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::foundation::{ApplicationError, LaunchError};
use crate::ports::{LaunchRequest, Platform, ProcessHandle, ProcessLauncher};

/// Launcher that hands out fake processes with increasing ids.
///
/// # Example
///
/// ```ignore
/// let launcher = Arc::new(InMemoryProcessLauncher::new());
/// let handler = LaunchApplicationHandler::new(launcher.clone(), Arc::new(NullConsole));
///
/// handler.handle(command, &schema)?;
///
/// assert_eq!(launcher.launch_count(), 1);
/// assert!(launcher.last_request().unwrap().arguments.contains(&"-server".to_string()));
/// ```
#[derive(Debug)]
pub struct InMemoryProcessLauncher {
    requests: RwLock<Vec<LaunchRequest>>,
    processes: RwLock<Vec<InMemoryProcess>>,
    next_id: AtomicU32,
    force_error: RwLock<Option<String>>,
}

impl InMemoryProcessLauncher {
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(Vec::new()),
            processes: RwLock::new(Vec::new()),
            next_id: AtomicU32::new(1000),
            force_error: RwLock::new(None),
        }
    }

    /// Makes every spawn fail with `reason`.
    pub fn with_error(self, reason: impl Into<String>) -> Self {
        *self.force_error.write().expect("lock poisoned") = Some(reason.into());
        self
    }

    // === Test Helpers ===

    pub fn launch_count(&self) -> usize {
        self.requests.read().expect("lock poisoned").len()
    }

    pub fn requests(&self) -> Vec<LaunchRequest> {
        self.requests.read().expect("lock poisoned").clone()
    }

    pub fn last_request(&self) -> Option<LaunchRequest> {
        self.requests.read().expect("lock poisoned").last().cloned()
    }

    /// Processes handed out so far, sharing state with the originals.
    pub fn processes(&self) -> Vec<InMemoryProcess> {
        self.processes.read().expect("lock poisoned").clone()
    }
}

impl Default for InMemoryProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for InMemoryProcessLauncher {
    fn spawn(
        &self,
        platform: &dyn Platform,
        request: &LaunchRequest,
    ) -> Result<Box<dyn ProcessHandle>, LaunchError> {
        if let Some(reason) = self.force_error.read().expect("lock poisoned").clone() {
            return Err(LaunchError::spawn(reason));
        }

        let process = InMemoryProcess {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            platform: platform.name().to_string(),
            terminated: Arc::new(AtomicBool::new(false)),
        };
        self.requests
            .write()
            .expect("lock poisoned")
            .push(request.clone());
        self.processes
            .write()
            .expect("lock poisoned")
            .push(process.clone());
        Ok(Box::new(process))
    }
}

/// A fake process. Clones share the terminated flag.
#[derive(Debug, Clone)]
pub struct InMemoryProcess {
    id: u32,
    platform: String,
    terminated: Arc<AtomicBool>,
}

impl InMemoryProcess {
    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::SeqCst)
    }
}

impl ProcessHandle for InMemoryProcess {
    fn id(&self) -> u32 {
        self.id
    }

    fn terminate(&mut self) -> Result<(), ApplicationError> {
        if self.terminated.swap(true, Ordering::SeqCst) {
            return Err(ApplicationError::TerminateFailed {
                pid: self.id,
                reason: "already terminated".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalPlatform;
    use crate::domain::options::Properties;

    fn request() -> LaunchRequest {
        LaunchRequest {
            name: "worker".to_string(),
            executable: "java".to_string(),
            arguments: vec!["-server".to_string()],
            environment_variables: Properties::new(),
            system_properties: Properties::new(),
            remote_debug: false,
            remote_debug_port: None,
        }
    }

    #[test]
    fn spawn_records_request_and_assigns_ids() {
        let launcher = InMemoryProcessLauncher::new();
        let first = launcher.spawn(&LocalPlatform::new(), &request()).unwrap();
        let second = launcher.spawn(&LocalPlatform::new(), &request()).unwrap();

        assert_eq!(launcher.launch_count(), 2);
        assert_eq!(second.id(), first.id() + 1);
        assert_eq!(launcher.processes()[0].platform(), "local");
    }

    #[test]
    fn forced_error_fails_spawn_without_recording() {
        let launcher = InMemoryProcessLauncher::new().with_error("no capacity");
        let result = launcher.spawn(&LocalPlatform::new(), &request());

        assert!(matches!(result, Err(LaunchError::Spawn(reason)) if reason == "no capacity"));
        assert_eq!(launcher.launch_count(), 0);
    }

    #[test]
    fn terminate_is_visible_through_clones_and_not_repeatable() {
        let launcher = InMemoryProcessLauncher::new();
        let mut handle = launcher.spawn(&LocalPlatform::new(), &request()).unwrap();

        handle.terminate().unwrap();
        assert!(launcher.processes()[0].is_terminated());
        assert!(handle.terminate().is_err());
    }
}
