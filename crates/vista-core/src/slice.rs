//! Slice: an immutable list of entities of one kind.
//!
//! A slice is the unit of memoization: derivations cache against the
//! slice's storage reference, so replacing a slice (even with equal
//! contents) invalidates anything derived from it.

use std::sync::Arc;

use crate::entity::Entity;

/// An immutable, reference-counted list of entities.
///
/// Cloning a `Slice` is cheap and shares storage with the original.
/// Two clones of the same slice compare equal under [`Slice::same_storage`];
/// two slices built from equal-but-separate vectors do not.
#[derive(Clone, Debug)]
pub struct Slice<E> {
    entities: Arc<[E]>,
}

impl<E: Entity> Slice<E> {
    /// Build a slice from a vector of entities.
    pub fn new(entities: Vec<E>) -> Self {
        Self {
            entities: entities.into(),
        }
    }

    /// An empty slice.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The entities, in slice order.
    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    /// Number of entities in the slice.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True if the slice holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over the entities in slice order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entities.iter()
    }

    /// The first entity whose identity field equals `id`, if any.
    ///
    /// Absence is an expected outcome, not an error.
    pub fn find(&self, id: &E::Id) -> Option<&E> {
        self.entities.iter().find(|e| e.identity() == id)
    }

    /// Referential identity: true iff both slices share the same storage.
    ///
    /// This is the cache key used by the derivation layer. It is stricter
    /// than content equality on purpose: the store replaces slice storage
    /// exactly when the slice changed.
    pub fn same_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entities, &other.entities)
    }
}

impl<E: Entity> From<Vec<E>> for Slice<E> {
    fn from(entities: Vec<E>) -> Self {
        Self::new(entities)
    }
}

impl<E: Entity> FromIterator<E> for Slice<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
