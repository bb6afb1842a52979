//! The view model handed to the presentation collaborator.

use std::collections::HashMap;
use std::sync::Arc;

use vista_core::Entity;

/// What the presentation layer receives for a feed: the derived item
/// mapping and a loading flag.
///
/// `loading` is derived, never stored: it is true iff `items` is empty.
/// There is no separate "in flight" bookkeeping in this layer.
#[derive(Debug, Clone)]
pub struct FeedView<E: Entity> {
    /// True iff the derived mapping has zero entries.
    pub loading: bool,
    /// Requested ids that exist in the slice, mapped to their entities.
    pub items: Arc<HashMap<E::Id, E>>,
}

impl<E: Entity> FeedView<E> {
    /// Build a view from a derived mapping, deriving the loading flag.
    pub fn from_items(items: Arc<HashMap<E::Id, E>>) -> Self {
        Self {
            loading: items.is_empty(),
            items,
        }
    }
}
