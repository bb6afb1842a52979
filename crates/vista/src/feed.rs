//! Feed: one usage site's derivation, gate, and requester, composed.

use tracing::debug;
use vista_core::{Entity, Snapshot};
use vista_select::EntitySetLookup;
use vista_surface::{FeedView, FetchGate, FetchRequest, FetchRequester};

use crate::error::Result;

/// A list-feed usage site.
///
/// A `Feed` binds a fixed id set to a memoized multi-entity lookup, a
/// one-shot fetch gate, and the external fetch collaborator. Create one
/// per display surface and drop it on unmount; the memoization cache and
/// the gate go with it.
pub struct Feed<E: Entity, R: FetchRequester<E::Id>> {
    ids: Vec<E::Id>,
    lookup: EntitySetLookup<E>,
    gate: FetchGate,
    requester: R,
}

impl<E: Entity, R: FetchRequester<E::Id>> Feed<E, R> {
    /// Create a feed over the named slice for the given id set.
    pub fn new(slice: impl Into<String>, ids: Vec<E::Id>, requester: R) -> Self {
        Self {
            ids,
            lookup: EntitySetLookup::new(slice),
            gate: FetchGate::new(),
            requester,
        }
    }

    /// The ids this feed displays.
    pub fn ids(&self) -> &[E::Id] {
        &self.ids
    }

    /// True once the fetch request has been dispatched.
    pub fn is_requested(&self) -> bool {
        self.gate.is_requested()
    }

    /// Signal that the display surface is mounted.
    ///
    /// Dispatches the fetch request on the first call only; re-renders
    /// may call this freely without triggering further requests.
    pub fn mount(&mut self) {
        if self.gate.fire() {
            debug!(slice = %self.lookup.slice_name(), count = self.ids.len(), "dispatching fetch");
            self.requester
                .request_entities(FetchRequest::new(self.ids.clone()));
        }
    }

    /// Derive the current view from a snapshot.
    ///
    /// Loading is derived: true iff no requested id is present yet.
    pub fn view(&mut self, snapshot: &Snapshot) -> Result<FeedView<E>> {
        let items = self.lookup.select(snapshot, &self.ids)?;
        Ok(FeedView::from_items(items))
    }
}
