//! Option values and their type-erased form.
//!
//! Every configuration fact handed to a launch is a `LaunchOption`. The
//! option's concrete Rust type is its kind: the registry indexes by it, and
//! each kind declares its own multiplicity and default provider through the
//! trait, so no runtime registration or reflection is needed.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::domain::profile::Profile;

/// How many values of one kind a registry may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    /// At most one value; adding replaces the previous one.
    Single,
    /// Any number of values, kept in insertion order.
    Collected,
}

/// A typed configuration fact.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct HeapSize(u32);
///
/// impl LaunchOption for HeapSize {
///     fn default_value() -> Option<Self> {
///         Some(HeapSize(256))
///     }
/// }
/// ```
pub trait LaunchOption: Any + Clone + PartialEq + fmt::Debug + Send + Sync {
    /// Whether the kind keeps one value or a collection.
    const MULTIPLICITY: Multiplicity = Multiplicity::Single;

    /// The kind's default provider. `None` means the kind has no default
    /// and an absent value is reported as not configured.
    fn default_value() -> Option<Self> {
        None
    }

    /// Short, human readable name of the kind, without module path or
    /// generic arguments.
    fn kind_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Returns the value as a lifecycle profile, if it is one.
    fn as_profile(&self) -> Option<Arc<dyn Profile>> {
        None
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Identity of an option kind.
#[derive(Debug, Clone, Copy)]
pub struct OptionKind {
    id: TypeId,
    name: &'static str,
}

impl OptionKind {
    /// Returns the kind of `T`.
    pub fn of<T: LaunchOption>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::kind_name(),
        }
    }

    /// Returns the short name of the kind.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for OptionKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for OptionKind {}

impl Hash for OptionKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Object-safe view of a `LaunchOption`, used for heterogeneous storage.
///
/// Implemented for every `LaunchOption`; there is no reason to implement
/// it by hand.
pub trait ErasedOption: fmt::Debug + Send + Sync {
    fn kind(&self) -> OptionKind;

    fn multiplicity(&self) -> Multiplicity;

    fn as_any(&self) -> &dyn Any;

    fn clone_boxed(&self) -> Box<dyn ErasedOption>;

    /// Structural equality across erased values of possibly different kinds.
    fn eq_erased(&self, other: &dyn ErasedOption) -> bool;

    /// Invokes the default provider of this value's kind.
    fn default_of_kind(&self) -> Option<Box<dyn ErasedOption>>;

    fn as_profile(&self) -> Option<Arc<dyn Profile>>;
}

impl<T: LaunchOption> ErasedOption for T {
    fn kind(&self) -> OptionKind {
        OptionKind::of::<T>()
    }

    fn multiplicity(&self) -> Multiplicity {
        T::MULTIPLICITY
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ErasedOption> {
        Box::new(self.clone())
    }

    fn eq_erased(&self, other: &dyn ErasedOption) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn default_of_kind(&self) -> Option<Box<dyn ErasedOption>> {
        T::default_value().map(|value| Box::new(value) as Box<dyn ErasedOption>)
    }

    fn as_profile(&self) -> Option<Arc<dyn Profile>> {
        LaunchOption::as_profile(self)
    }
}

impl Clone for Box<dyn ErasedOption> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

impl PartialEq for dyn ErasedOption {
    fn eq(&self, other: &Self) -> bool {
        self.eq_erased(other)
    }
}
