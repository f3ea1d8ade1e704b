//! Platform adapters.
//!
//! - `LocalPlatform` - The machine the harness runs on
//! - `NullConsole` - Discards application output
//! - `PlatformAddress` - Platform-aware property value

mod local;
mod platform_address;

pub use local::{LocalPlatform, NullConsole};
pub use platform_address::PlatformAddress;
