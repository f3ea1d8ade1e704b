//! Process launcher adapters.
//!
//! - `InMemoryProcessLauncher` - Records launch requests, for testing

mod in_memory;

pub use in_memory::{InMemoryProcess, InMemoryProcessLauncher};
