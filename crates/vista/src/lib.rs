//! # Vista
//!
//! Memoized, derived-state selection over an immutable, normalized store
//! snapshot, plus the one-shot fetch trigger around it.
//!
//! ## Overview
//!
//! Vista models the derivation side of a store-driven view:
//!
//! - **Snapshot**: an immutable view of the store, organized into named
//!   slices of entities. Owned externally; read-only here.
//! - **Derivations**: pure functions of (snapshot, parameters) with
//!   per-usage-site memoization keyed on the slice's storage reference
//!   and the parameter value.
//! - **Surface**: a usage site mounts once, dispatches one fetch request
//!   to an external collaborator, and derives `{loading, items}` from
//!   each snapshot it observes.
//!
//! ## Key Concepts
//!
//! - **Absence is not an error**: an id with no matching entity is
//!   simply missing from the result.
//! - **Per-site caches**: lookup constructors are factories; caches are
//!   never shared between usage sites.
//! - **Loading is derived**: true iff the derived mapping is empty.
//!
//! ## Usage
//!
//! ```rust
//! use vista::{ChannelRequester, Entity, Feed, Snapshot};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Listing { id: String, price: f64 }
//!
//! impl Entity for Listing {
//!     type Id = String;
//!     fn identity(&self) -> &String { &self.id }
//! }
//!
//! let (requester, _rx) = ChannelRequester::new();
//! let mut feed = Feed::<Listing, _>::new(
//!     "listings",
//!     vec!["L1".to_string(), "L2".to_string()],
//!     requester,
//! );
//!
//! feed.mount();
//!
//! let snapshot = Snapshot::builder()
//!     .slice("listings", vec![Listing { id: "L1".into(), price: 10.0 }])
//!     .build();
//!
//! let view = feed.view(&snapshot).unwrap();
//! assert!(!view.loading);
//! assert_eq!(view.items.len(), 1);
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `vista::core` - Snapshots, slices, entity identity
//! - `vista::select` - Memoized derivations
//! - `vista::surface` - Fetch gate, requester interface, view model

pub mod error;
pub mod feed;

// Re-export component crates
pub use vista_core as core;
pub use vista_select as select;
pub use vista_surface as surface;

// Re-export main types for convenience
pub use error::{Result, VistaError};
pub use feed::Feed;

// Re-export commonly used component types
pub use vista_core::{Entity, Slice, Snapshot, SnapshotBuilder, SnapshotError};
pub use vista_select::{EntityLookup, EntitySetLookup, SelectError};
pub use vista_surface::{
    ChannelRequester, FeedView, FetchGate, FetchPhase, FetchRequest, FetchRequester,
};
