//! # Vista Select
//!
//! The derivation layer: pure, memoized projections over a
//! [`Snapshot`](vista_core::Snapshot).
//!
//! ## Overview
//!
//! A derivation computes a view-specific result from (snapshot, query
//! parameters) and nothing else. Identical inputs always yield an
//! identical result, and the memoized path yields the identical `Arc`.
//! Derivations never mutate the snapshot.
//!
//! ## Key Types
//!
//! - [`EntityLookup`] - One entity by identity field, or `None`
//! - [`EntitySetLookup`] - Projection of a slice onto a requested id set
//! - [`SelectError`] - Contract violations from the snapshot layer
//!
//! ## Cache scope
//!
//! Constructors are factories: one lookup value per usage site, each
//! with its own cache, discarded when the site drops it. There is no
//! module-level or global cache.
//!
//! ## Usage
//!
//! ```rust
//! use vista_core::{Entity, Snapshot};
//! use vista_select::EntitySetLookup;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Listing { id: String }
//!
//! impl Entity for Listing {
//!     type Id = String;
//!     fn identity(&self) -> &String { &self.id }
//! }
//!
//! let snapshot = Snapshot::builder()
//!     .slice("listings", vec![Listing { id: "L1".into() }])
//!     .build();
//!
//! let mut lookup = EntitySetLookup::<Listing>::new("listings");
//! let items = lookup.select(&snapshot, &["L1".to_string()]).unwrap();
//! assert_eq!(items.len(), 1);
//! ```

pub mod error;
pub mod multi;
pub mod single;

pub use error::{Result, SelectError};
pub use multi::EntitySetLookup;
pub use single::EntityLookup;
