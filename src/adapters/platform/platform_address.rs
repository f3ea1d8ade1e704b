//! A system property value holding the resolving platform's address.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::options::PlatformAware;
use crate::ports::Platform;

/// Resolves to the address of the platform it was last bound to,
/// optionally followed by `:port`.
///
/// Useful for properties such as a cluster's well-known address, which
/// differs per platform the same schema is launched on.
#[derive(Debug, Default)]
pub struct PlatformAddress {
    port: Option<u16>,
    address: Mutex<Option<String>>,
}

impl PlatformAddress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_port(port: u16) -> Self {
        Self {
            port: Some(port),
            address: Mutex::new(None),
        }
    }

    fn bound(&self) -> MutexGuard<'_, Option<String>> {
        self.address.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn render(&self, address: &Option<String>) -> String {
        let address = address.as_deref().unwrap_or_default();
        match self.port {
            Some(port) => format!("{}:{}", address, port),
            None => address.to_string(),
        }
    }
}

impl PlatformAware for PlatformAddress {
    fn set_platform(&self, platform: &dyn Platform) {
        *self.bound() = Some(platform.address().to_string());
    }

    /// Unbound values resolve to an empty string.
    fn resolve(&self) -> String {
        self.render(&self.bound())
    }

    fn resolve_for(&self, platform: &dyn Platform) -> String {
        let mut address = self.bound();
        *address = Some(platform.address().to_string());
        self.render(&address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalPlatform;

    #[test]
    fn resolves_to_bound_platform_address() {
        let value = PlatformAddress::with_port(7574);
        value.set_platform(&LocalPlatform::new().with_address("10.1.2.3"));
        assert_eq!(value.resolve(), "10.1.2.3:7574");
    }

    #[test]
    fn rebinding_changes_resolution() {
        let value = PlatformAddress::new();
        value.set_platform(&LocalPlatform::new());
        assert_eq!(value.resolve(), "127.0.0.1");
        value.set_platform(&LocalPlatform::new().with_address("192.168.0.9"));
        assert_eq!(value.resolve(), "192.168.0.9");
    }

    #[test]
    fn unbound_value_is_empty() {
        assert_eq!(PlatformAddress::new().resolve(), "");
    }

    #[test]
    fn concurrent_resolution_uses_each_callers_platform() {
        let value = PlatformAddress::with_port(9000);
        let addresses = ["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4"];

        std::thread::scope(|scope| {
            for address in addresses {
                let value = &value;
                scope.spawn(move || {
                    let platform = LocalPlatform::new().with_address(address);
                    for _ in 0..500 {
                        assert_eq!(
                            value.resolve_for(&platform),
                            format!("{}:9000", address)
                        );
                    }
                });
            }
        });
    }
}
