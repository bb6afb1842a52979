//! # Vista Core
//!
//! Core primitives for Vista: snapshots, slices, and entity identity.
//!
//! This crate contains no I/O and no caching. It is the pure data model
//! the derivation layer reads from.
//!
//! ## Key Types
//!
//! - [`Snapshot`] - An immutable view of the whole store at one point in time
//! - [`Slice`] - An immutable list of entities of one kind
//! - [`Entity`] - The trait naming an entity's identity field
//!
//! ## Immutability
//!
//! Snapshots are never mutated in place. [`Snapshot::update_slice`]
//! produces the next snapshot, sharing storage with every untouched
//! slice; derivations key their caches on that shared storage.

pub mod entity;
pub mod error;
pub mod slice;
pub mod snapshot;

pub use entity::Entity;
pub use error::{Result, SnapshotError};
pub use slice::Slice;
pub use snapshot::{Snapshot, SnapshotBuilder};
