//! System properties and environment variables for a launch.
//!
//! System property values may be platform-aware: such a value is bound to
//! the platform performing the resolution before it is read. Each
//! resolution pass binds every platform-aware value exactly once, in
//! registration order.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ports::Platform;

use super::option::LaunchOption;

/// Ordered `name=value` pairs. Setting an existing name replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(Vec<(String, String)>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A property value whose final text depends on the resolving platform.
///
/// Resolution is two-phase: `set_platform` binds the platform, then
/// `resolve` reads the final string. Values shared by concurrent launches
/// override `resolve_for` to do both under one lock.
pub trait PlatformAware: Send + Sync + fmt::Debug {
    fn set_platform(&self, platform: &dyn Platform);

    fn resolve(&self) -> String;

    /// Binds `platform` and resolves against it.
    fn resolve_for(&self, platform: &dyn Platform) -> String {
        self.set_platform(platform);
        self.resolve()
    }
}

/// Value of a system property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Literal(String),
    PlatformAware(Arc<dyn PlatformAware>),
}

impl PropertyValue {
    /// Produces the final text of this value for `platform`.
    pub fn resolve_for(&self, platform: &dyn Platform) -> String {
        match self {
            PropertyValue::Literal(text) => text.clone(),
            PropertyValue::PlatformAware(value) => value.resolve_for(platform),
        }
    }
}

/// Platform-aware values are equal only when they are the same instance.
impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropertyValue::Literal(a), PropertyValue::Literal(b)) => a == b,
            (PropertyValue::PlatformAware(a), PropertyValue::PlatformAware(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::Literal(text.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        PropertyValue::Literal(text)
    }
}

impl<P: PlatformAware + 'static> From<Arc<P>> for PropertyValue {
    fn from(value: Arc<P>) -> Self {
        PropertyValue::PlatformAware(value)
    }
}

/// The system properties of a launch, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemProperties(Vec<(String, PropertyValue)>);

impl SystemProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `name` set to `value`, replacing any earlier
    /// value of the same name in place.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves every property against `platform`, in registration order.
    pub fn resolve(&self, platform: &dyn Platform) -> Properties {
        let mut resolved = Properties::new();
        for (name, value) in &self.0 {
            resolved.set(name.clone(), value.resolve_for(platform));
        }
        resolved
    }
}

impl LaunchOption for SystemProperties {
    fn default_value() -> Option<Self> {
        Some(SystemProperties::new())
    }
}

/// Environment variables of the launched process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentVariables(Properties);

impl EnvironmentVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.set(name, value);
        self
    }

    pub fn variables(&self) -> &Properties {
        &self.0
    }
}

impl LaunchOption for EnvironmentVariables {
    fn default_value() -> Option<Self> {
        Some(EnvironmentVariables::new())
    }
}
