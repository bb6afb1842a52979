//! # Vista Testkit
//!
//! Testing utilities for Vista: sample entities, snapshot fixtures,
//! a recording requester, and proptest generators.
//!
//! This crate is for tests only and is not part of the public API.

pub mod entities;
pub mod fixtures;
pub mod generators;

pub use entities::{Listing, User, LISTINGS_SLICE, USERS_SLICE};
pub use fixtures::{
    sample_listings, sample_snapshot, sample_users, snapshot_with, RecordingRequester,
};
