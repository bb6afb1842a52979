//! Single-entity lookup derivation.

use std::sync::Arc;

use tracing::trace;
use vista_core::{Entity, Slice, Snapshot};

use crate::error::Result;

/// Memoized lookup of one entity by its identity field.
///
/// Construct one `EntityLookup` per usage site and keep it alive for the
/// site's lifetime; the cache lives inside the value, so distinct sites
/// never share or thrash each other's cache. Dropping the lookup
/// discards the cache.
///
/// The cached result is recomputed only when the slice's storage
/// reference or the requested id changes between calls. An unchanged
/// input pair returns the identical `Arc`.
pub struct EntityLookup<E: Entity> {
    slice: String,
    cache: Option<SingleCache<E>>,
}

struct SingleCache<E: Entity> {
    storage: Slice<E>,
    id: E::Id,
    result: Option<Arc<E>>,
}

impl<E: Entity> EntityLookup<E> {
    /// Create a lookup over the named slice. This is the per-usage-site
    /// factory: each call yields an independent cache.
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

    /// The first entity in the slice whose identity equals `id`, or
    /// `None` if no entity matches. Absence is an expected result.
    pub fn select(&mut self, snapshot: &Snapshot, id: &E::Id) -> Result<Option<Arc<E>>> {
        let slice = snapshot.get_slice::<E>(&self.slice)?;

        if let Some(cache) = &self.cache {
            if cache.storage.same_storage(&slice) && cache.id == *id {
                trace!(slice = %self.slice, id = ?id, "single lookup: cache hit");
                return Ok(cache.result.clone());
            }
        }

        trace!(slice = %self.slice, id = ?id, "single lookup: recompute");
        let result = slice.find(id).cloned().map(Arc::new);
        self.cache = Some(SingleCache {
            storage: slice,
            id: id.clone(),
            result: result.clone(),
        });
        Ok(result)
    }
}
