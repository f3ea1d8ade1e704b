//! The process-wide detector instance and its test seam.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::adapters::ProcessLaunchArguments;

use super::ArgumentDetector;

static GLOBAL_DETECTOR: Lazy<RwLock<Arc<ArgumentDetector>>> = Lazy::new(|| {
    tracing::debug!("initializing process-wide argument detector");
    RwLock::new(Arc::new(ArgumentDetector::new(Arc::new(
        ProcessLaunchArguments::new(),
    ))))
});

static INSTALL_LOCK: Mutex<()> = Mutex::new(());

/// Returns the process-wide detector, creating it on first access.
pub fn global() -> Arc<ArgumentDetector> {
    GLOBAL_DETECTOR
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the process-wide detector until the returned guard is dropped.
///
/// Installs are serialized: a second `install` blocks until the first
/// guard is dropped, so must not be called while holding a guard on the
/// same thread.
pub fn install(detector: ArgumentDetector) -> DetectorGuard {
    let lock = INSTALL_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let previous = std::mem::replace(
        &mut *GLOBAL_DETECTOR
            .write()
            .unwrap_or_else(PoisonError::into_inner),
        Arc::new(detector),
    );
    DetectorGuard {
        previous: Some(previous),
        _lock: lock,
    }
}

/// Restores the previously installed detector when dropped.
#[must_use = "the detector is restored as soon as the guard is dropped"]
pub struct DetectorGuard {
    previous: Option<Arc<ArgumentDetector>>,
    _lock: MutexGuard<'static, ()>,
}

impl Drop for DetectorGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            *GLOBAL_DETECTOR
                .write()
                .unwrap_or_else(PoisonError::into_inner) = previous;
        }
    }
}
