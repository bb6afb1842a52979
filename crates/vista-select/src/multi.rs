//! Multi-entity lookup derivation: project a slice onto a requested id set.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::trace;
use vista_core::{Entity, Slice, Snapshot};

use crate::error::Result;

/// Memoized projection of a slice onto a set of requested ids.
///
/// The result maps each requested id that exists in the slice to its
/// entity; ids with no match are simply absent, never errors and never
/// `None` entries. When a slice holds duplicate identities the first
/// entity in slice order wins, matching [`EntityLookup`].
///
/// Like [`EntityLookup`], this is a per-usage-site value: `new` is the
/// factory, and each instance carries its own single-entry cache. A
/// cache shared between sites would thrash whenever two sites request
/// different id sets, so sharing an `EntitySetLookup` across sites is
/// incorrect, not merely slow.
///
/// [`EntityLookup`]: crate::EntityLookup
pub struct EntitySetLookup<E: Entity> {
    slice: String,
    cache: Option<SetCache<E>>,
}

struct SetCache<E: Entity> {
    storage: Slice<E>,
    ids: Vec<E::Id>,
    result: Arc<HashMap<E::Id, E>>,
}

impl<E: Entity> EntitySetLookup<E> {
    /// Create a lookup over the named slice, with a fresh cache.
    pub fn new(slice: impl Into<String>) -> Self {
        Self {
            slice: slice.into(),
            cache: None,
        }
    }

    /// The slice this lookup reads.
    pub fn slice_name(&self) -> &str {
        &self.slice
    }

    /// Project the slice onto `ids`.
    ///
    /// Recomputes only when the slice's storage reference or the id list
    /// changes between calls; an unchanged input pair returns the
    /// identical `Arc`. The id list compares by value including order.
    pub fn select(&mut self, snapshot: &Snapshot, ids: &[E::Id]) -> Result<Arc<HashMap<E::Id, E>>> {
        let slice = snapshot.get_slice::<E>(&self.slice)?;

        if let Some(cache) = &self.cache {
            if cache.storage.same_storage(&slice) && cache.ids == ids {
                trace!(slice = %self.slice, count = ids.len(), "set lookup: cache hit");
                return Ok(Arc::clone(&cache.result));
            }
        }

        trace!(slice = %self.slice, count = ids.len(), "set lookup: recompute");
        let requested: HashSet<&E::Id> = ids.iter().collect();
        let mut result = HashMap::with_capacity(requested.len());
        for entity in slice.iter() {
            if requested.contains(entity.identity()) {
                result
                    .entry(entity.identity().clone())
                    .or_insert_with(|| entity.clone());
            }
        }

        let result = Arc::new(result);
        self.cache = Some(SetCache {
            storage: slice,
            ids: ids.to_vec(),
            result: Arc::clone(&result),
        });
        Ok(result)
    }
}
