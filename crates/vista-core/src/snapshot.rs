//! Snapshot: an immutable mapping from slice name to slice state.
//!
//! The snapshot is the store's read surface. It is never mutated in
//! place: updating a slice produces a new snapshot that shares storage
//! with every untouched slice. A derivation therefore observes exactly
//! one consistent snapshot per invocation, never a mix of pre- and
//! post-update states.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::entity::Entity;
use crate::error::{Result, SnapshotError};
use crate::slice::Slice;

/// Type-erased slice storage. The concrete type is `Slice<E>`.
type ErasedSlice = Arc<dyn Any + Send + Sync>;

/// An immutable view of the whole store at one point in time.
#[derive(Clone, Default)]
pub struct Snapshot {
    slices: HashMap<String, ErasedSlice>,
}

impl Snapshot {
    /// An empty snapshot with no slices registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a snapshot.
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::new()
    }

    /// Read a slice by name.
    ///
    /// A missing slice, or a slice registered under a different entity
    /// type, is a contract violation by whoever assembled the snapshot
    /// and is reported as an error rather than an empty slice.
    pub fn get_slice<E: Entity>(&self, name: &str) -> Result<Slice<E>> {
        let erased = self
            .slices
            .get(name)
            .ok_or_else(|| SnapshotError::MissingSlice(name.to_string()))?;

        erased
            .downcast_ref::<Slice<E>>()
            .cloned()
            .ok_or_else(|| SnapshotError::SliceTypeMismatch {
                slice: name.to_string(),
                expected: std::any::type_name::<E>(),
            })
    }

    /// True if a slice is registered under `name`, regardless of type.
    pub fn has_slice(&self, name: &str) -> bool {
        self.slices.contains_key(name)
    }

    /// Names of all registered slices, in no particular order.
    pub fn slice_names(&self) -> impl Iterator<Item = &str> {
        self.slices.keys().map(String::as_str)
    }

    /// Produce the next snapshot with one slice replaced.
    ///
    /// Every other slice shares storage with `self`, so derivations over
    /// untouched slices keep their caches across the update.
    pub fn update_slice<E: Entity>(&self, name: &str, entities: Vec<E>) -> Snapshot {
        let mut slices = self.slices.clone();
        slices.insert(
            name.to_string(),
            Arc::new(Slice::new(entities)) as ErasedSlice,
        );
        Snapshot { slices }
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.slice_names().collect();
        names.sort_unstable();
        f.debug_struct("Snapshot").field("slices", &names).finish()
    }
}

/// Builder for [`Snapshot`].
#[derive(Default)]
pub struct SnapshotBuilder {
    slices: HashMap<String, ErasedSlice>,
}

impl SnapshotBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slice under `name`. Registering the same name twice
    /// replaces the earlier slice.
    pub fn slice<E: Entity>(mut self, name: impl Into<String>, entities: Vec<E>) -> Self {
        self.slices
            .insert(name.into(), Arc::new(Slice::new(entities)) as ErasedSlice);
        self
    }

    /// Finish building.
    pub fn build(self) -> Snapshot {
        Snapshot {
            slices: self.slices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: String,
    }

    impl Entity for Item {
        type Id = String;

        fn identity(&self) -> &String {
            &self.id
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Other {
        id: u64,
    }

    impl Entity for Other {
        type Id = u64;

        fn identity(&self) -> &u64 {
            &self.id
        }
    }

    fn item(id: &str) -> Item {
        Item { id: id.to_string() }
    }

    #[test]
    fn test_get_slice_roundtrip() {
        let snapshot = Snapshot::builder()
            .slice("items", vec![item("a"), item("b")])
            .build();

        let slice = snapshot.get_slice::<Item>("items").unwrap();
        assert_eq!(slice.len(), 2);
        assert_eq!(slice.find(&"b".to_string()), Some(&item("b")));
    }

    #[test]
    fn test_missing_slice_is_an_error() {
        let snapshot = Snapshot::empty();
        let err = snapshot.get_slice::<Item>("items").unwrap_err();
        assert!(matches!(err, SnapshotError::MissingSlice(name) if name == "items"));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let snapshot = Snapshot::builder().slice("items", vec![item("a")]).build();
        let err = snapshot.get_slice::<Other>("items").unwrap_err();
        assert!(matches!(err, SnapshotError::SliceTypeMismatch { .. }));
    }

    #[test]
    fn test_update_slice_shares_untouched_slices() {
        let snapshot = Snapshot::builder()
            .slice("items", vec![item("a")])
            .slice("others", vec![Other { id: 1 }])
            .build();

        let next = snapshot.update_slice("items", vec![item("a"), item("b")]);

        let before = snapshot.get_slice::<Other>("others").unwrap();
        let after = next.get_slice::<Other>("others").unwrap();
        assert!(before.same_storage(&after));

        let old_items = snapshot.get_slice::<Item>("items").unwrap();
        let new_items = next.get_slice::<Item>("items").unwrap();
        assert!(!old_items.same_storage(&new_items));
        assert_eq!(old_items.len(), 1);
        assert_eq!(new_items.len(), 2);
    }
}
