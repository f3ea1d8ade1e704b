//! OptionsByType - the type-indexed option registry.
//!
//! The registry maps option kinds to their current value(s). Kinds keep the
//! position of their first insertion and collected kinds keep the order in
//! which their values were added, so `iter`, `export` and `profiles` are
//! deterministic. Some consumers (flag builders) depend on that order.

use std::fmt;
use std::sync::Arc;

use crate::domain::foundation::OptionError;
use crate::domain::profile::Profile;

use super::option::{ErasedOption, LaunchOption, Multiplicity, OptionKind};

/// All values currently held for one kind. Never empty.
struct Slot {
    kind: OptionKind,
    values: Vec<Box<dyn ErasedOption>>,
}

impl Clone for Slot {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            values: self.values.clone(),
        }
    }
}

/// A type-indexed, order-preserving collection of launch options.
///
/// Each launch owns its registry exclusively, so there is no locking here.
///
/// # Example
///
/// ```ignore
/// let mut options = OptionsByType::new();
/// options
///     .add(Freeform::new("-Xmx512m"))
///     .add(CommercialFeatures::disabled());
///
/// let features = options.get::<CommercialFeatures>();
/// let flags = options.get_all::<Freeform>();
/// ```
#[derive(Clone, Default)]
pub struct OptionsByType {
    slots: Vec<Slot>,
}

impl OptionsByType {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value under its kind.
    ///
    /// Single-valued kinds have their previous value replaced in place;
    /// collected kinds get the value appended.
    pub fn add<T: LaunchOption>(&mut self, value: T) -> &mut Self {
        self.add_erased(Box::new(value))
    }

    /// Builder form of [`add`](Self::add).
    pub fn with<T: LaunchOption>(mut self, value: T) -> Self {
        self.add(value);
        self
    }

    /// Adds an already type-erased value.
    pub fn add_erased(&mut self, value: Box<dyn ErasedOption>) -> &mut Self {
        let kind = value.kind();
        match self.slots.iter_mut().find(|slot| slot.kind == kind) {
            Some(slot) => match value.multiplicity() {
                Multiplicity::Single => {
                    tracing::trace!(kind = kind.name(), "replacing option");
                    slot.values = vec![value];
                }
                Multiplicity::Collected => slot.values.push(value),
            },
            None => self.slots.push(Slot {
                kind,
                values: vec![value],
            }),
        }
        self
    }

    /// Adds every value of `other`, in `other`'s order.
    pub fn add_all(&mut self, other: &OptionsByType) -> &mut Self {
        for value in other.iter() {
            self.add_erased(value.clone_boxed());
        }
        self
    }

    /// Returns the current value of kind `T`.
    ///
    /// Falls back to the kind's default provider when nothing is stored. A
    /// `None` result means the kind is not configured; callers treat that
    /// as empty rather than as a failure. For collected kinds the most
    /// recently added value is returned.
    pub fn get<T: LaunchOption>(&self) -> Option<T> {
        self.stored::<T>()
            .and_then(|values| values.last())
            .and_then(|value| value.as_any().downcast_ref::<T>().cloned())
            .or_else(T::default_value)
    }

    /// Like [`get`](Self::get), but reports a missing kind as an error.
    pub fn require<T: LaunchOption>(&self) -> Result<T, OptionError> {
        self.get::<T>()
            .ok_or_else(|| OptionError::not_configured(T::kind_name()))
    }

    /// Returns every value of kind `T` in insertion order.
    ///
    /// When nothing is stored this is the default provider's value, if the
    /// kind has one, or an empty list.
    pub fn get_all<T: LaunchOption>(&self) -> Vec<T> {
        match self.stored::<T>() {
            Some(values) => values
                .iter()
                .filter_map(|value| value.as_any().downcast_ref::<T>().cloned())
                .collect(),
            None => T::default_value().into_iter().collect(),
        }
    }

    /// Returns true if a value of kind `T` is stored (defaults do not count).
    pub fn contains<T: LaunchOption>(&self) -> bool {
        self.stored::<T>().is_some()
    }

    /// Removes every value of kind `T`. Returns true if anything was removed.
    pub fn remove<T: LaunchOption>(&mut self) -> bool {
        let kind = OptionKind::of::<T>();
        let before = self.slots.len();
        self.slots.retain(|slot| slot.kind != kind);
        self.slots.len() != before
    }

    /// Number of stored values across all kinds.
    pub fn len(&self) -> usize {
        self.slots.iter().map(|slot| slot.values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Kinds currently holding values, in order of first insertion.
    pub fn kinds(&self) -> Vec<OptionKind> {
        self.slots.iter().map(|slot| slot.kind).collect()
    }

    /// Iterates stored values: kinds by first insertion, values by insertion.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ErasedOption> + '_ {
        self.slots
            .iter()
            .flat_map(|slot| slot.values.iter().map(|value| value.as_ref()))
    }

    /// Materializes the stored values in [`iter`](Self::iter) order.
    pub fn export(&self) -> Vec<Box<dyn ErasedOption>> {
        self.iter().map(|value| value.clone_boxed()).collect()
    }

    /// Every stored value that is also a lifecycle profile, in registry order.
    pub fn profiles(&self) -> Vec<Arc<dyn Profile>> {
        self.iter().filter_map(|value| value.as_profile()).collect()
    }

    fn stored<T: LaunchOption>(&self) -> Option<&[Box<dyn ErasedOption>]> {
        let kind = OptionKind::of::<T>();
        self.slot(kind).map(|slot| slot.values.as_slice())
    }

    fn slot(&self, kind: OptionKind) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.kind == kind)
    }

    /// Values `kind` resolves to here: stored values, else the default
    /// provider's value reached through `sample`, a value of the same kind.
    fn resolve_erased(
        &self,
        kind: OptionKind,
        sample: &dyn ErasedOption,
    ) -> Vec<Box<dyn ErasedOption>> {
        match self.slot(kind) {
            Some(slot) => slot.values.clone(),
            None => sample.default_of_kind().into_iter().collect(),
        }
    }

    fn resolves_like(&self, other: &OptionsByType) -> bool {
        self.slots.iter().all(|slot| {
            let theirs = other.resolve_erased(slot.kind, slot.values[0].as_ref());
            same_values(&slot.values, &theirs)
        })
    }
}

fn same_values(left: &[Box<dyn ErasedOption>], right: &[Box<dyn ErasedOption>]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| l.eq_erased(r.as_ref()))
}

/// Two registries are equal when every kind either of them holds resolves
/// to equal values in both, counting default providers.
impl PartialEq for OptionsByType {
    fn eq(&self, other: &Self) -> bool {
        self.resolves_like(other) && other.resolves_like(self)
    }
}

impl fmt::Debug for OptionsByType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: LaunchOption> Extend<T> for OptionsByType {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct HeapSize(u32);

    impl LaunchOption for HeapSize {
        fn default_value() -> Option<Self> {
            Some(HeapSize(256))
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Flag(&'static str);

    impl LaunchOption for Flag {
        const MULTIPLICITY: Multiplicity = Multiplicity::Collected;
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct WorkingDir(&'static str);

    impl LaunchOption for WorkingDir {}

    #[test]
    fn empty_registry_resolves_default_provider() {
        let options = OptionsByType::new();
        assert_eq!(options.get::<HeapSize>(), HeapSize::default_value());
        assert!(!options.contains::<HeapSize>());
    }

    #[test]
    fn kind_without_default_is_not_configured() {
        let options = OptionsByType::new();
        assert_eq!(options.get::<WorkingDir>(), None);
        assert_eq!(
            options.require::<WorkingDir>(),
            Err(OptionError::not_configured("WorkingDir"))
        );
        assert!(options.get_all::<WorkingDir>().is_empty());
    }

    #[test]
    fn single_valued_add_replaces_previous_value() {
        let mut options = OptionsByType::new();
        options.add(HeapSize(512)).add(HeapSize(1024));

        assert_eq!(options.get::<HeapSize>(), Some(HeapSize(1024)));
        assert_eq!(options.get_all::<HeapSize>(), vec![HeapSize(1024)]);
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn replacing_keeps_original_position() {
        let options = OptionsByType::new()
            .with(HeapSize(512))
            .with(WorkingDir("/tmp"))
            .with(HeapSize(1024));

        assert_eq!(
            options.kinds(),
            vec![OptionKind::of::<HeapSize>(), OptionKind::of::<WorkingDir>()]
        );
    }

    #[test]
    fn collected_kind_preserves_insertion_order() {
        let mut options = OptionsByType::new();
        options.add(Flag("-a")).add(Flag("-b")).add(Flag("-c"));

        assert_eq!(
            options.get_all::<Flag>(),
            vec![Flag("-a"), Flag("-b"), Flag("-c")]
        );
        assert_eq!(options.get::<Flag>(), Some(Flag("-c")));
    }

    #[test]
    fn export_follows_first_insertion_of_each_kind() {
        let options = OptionsByType::new()
            .with(Flag("-a"))
            .with(HeapSize(64))
            .with(Flag("-b"));

        let exported: Vec<String> = options
            .export()
            .iter()
            .map(|value| format!("{:?}", value))
            .collect();
        assert_eq!(exported, vec!["Flag(\"-a\")", "Flag(\"-b\")", "HeapSize(64)"]);
    }

    #[test]
    fn add_all_merges_in_source_order() {
        let mut base = OptionsByType::new().with(Flag("-a")).with(HeapSize(1));
        let overrides = OptionsByType::new().with(HeapSize(2)).with(Flag("-b"));

        base.add_all(&overrides);

        assert_eq!(base.get::<HeapSize>(), Some(HeapSize(2)));
        assert_eq!(base.get_all::<Flag>(), vec![Flag("-a"), Flag("-b")]);
    }

    #[test]
    fn remove_drops_every_value_of_kind() {
        let mut options = OptionsByType::new().with(Flag("-a")).with(Flag("-b"));
        assert!(options.remove::<Flag>());
        assert!(!options.remove::<Flag>());
        assert!(options.is_empty());
    }

    #[test]
    fn extend_adds_each_value() {
        let mut options = OptionsByType::new();
        options.extend(vec![Flag("-x"), Flag("-y")]);
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn equality_counts_default_providers() {
        let explicit_default = OptionsByType::new().with(HeapSize(256));
        assert_eq!(explicit_default, OptionsByType::new());

        let non_default = OptionsByType::new().with(HeapSize(512));
        assert_ne!(non_default, OptionsByType::new());
    }

    #[test]
    fn equality_compares_collected_values_in_order() {
        let ab = OptionsByType::new().with(Flag("-a")).with(Flag("-b"));
        let ba = OptionsByType::new().with(Flag("-b")).with(Flag("-a"));
        assert_ne!(ab, ba);
        assert_eq!(ab.clone(), ab);
    }

    #[test]
    fn equality_ignores_kind_order() {
        let left = OptionsByType::new().with(HeapSize(1)).with(WorkingDir("/a"));
        let right = OptionsByType::new().with(WorkingDir("/a")).with(HeapSize(1));
        assert_eq!(left, right);
    }

    #[test]
    fn kind_without_default_present_on_one_side_is_unequal() {
        let left = OptionsByType::new().with(WorkingDir("/a"));
        assert_ne!(left, OptionsByType::new());
        assert_ne!(OptionsByType::new(), left);
    }

    #[test]
    fn debug_lists_values_in_order() {
        let options = OptionsByType::new().with(HeapSize(8)).with(Flag("-v"));
        assert_eq!(format!("{:?}", options), "[HeapSize(8), Flag(\"-v\")]");
    }
}
