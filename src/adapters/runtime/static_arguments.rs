//! Fixed launch arguments for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::foundation::DetectionError;
use crate::ports::LaunchArgumentSource;

/// A `LaunchArgumentSource` returning a fixed list, or a fixed error.
///
/// Counts how often it was read so tests can check caching.
#[derive(Debug)]
pub struct StaticLaunchArguments {
    result: Result<Vec<String>, DetectionError>,
    reads: AtomicUsize,
}

impl StaticLaunchArguments {
    pub fn new<I, S>(arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            result: Ok(arguments.into_iter().map(Into::into).collect()),
            reads: AtomicUsize::new(0),
        }
    }

    /// A source whose every read fails with `error`.
    pub fn failing(error: DetectionError) -> Self {
        Self {
            result: Err(error),
            reads: AtomicUsize::new(0),
        }
    }

    /// Number of times the arguments were read.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl LaunchArgumentSource for StaticLaunchArguments {
    fn launch_arguments(&self) -> Result<Vec<String>, DetectionError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
