//! Proptest generators for property-based testing.

use proptest::prelude::*;

use crate::entities::{Listing, User};

/// Generate an entity id from a small alphabet, so collisions between
/// requested and present ids actually happen.
pub fn entity_id() -> impl Strategy<Value = String> {
    "[a-e][0-9]"
}

/// Generate a list of requested ids.
pub fn id_list(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(entity_id(), 0..=max_len)
}

/// Generate a user with a small-alphabet Google id.
pub fn user() -> impl Strategy<Value = User> {
    (entity_id(), "[A-Z][a-z]{2,7}").prop_map(|(google_id, name)| User { google_id, name })
}

/// Generate a list of users.
pub fn users(max_len: usize) -> impl Strategy<Value = Vec<User>> {
    prop::collection::vec(user(), 0..=max_len)
}

/// Generate a listing with a small-alphabet id.
pub fn listing() -> impl Strategy<Value = Listing> {
    (
        entity_id(),
        0.0f64..500.0,
        prop_oneof![Just("new"), Just("good"), Just("fair"), Just("poor")],
        prop_oneof![Just("available"), Just("sold")],
        0i64..=2_000_000_000,
    )
        .prop_map(|(listing_id, price, condition, status, timestamp)| Listing {
            listing_id,
            price,
            condition: condition.to_string(),
            status: status.to_string(),
            timestamp,
        })
}

/// Generate a list of listings.
pub fn listings(max_len: usize) -> impl Strategy<Value = Vec<Listing>> {
    prop::collection::vec(listing(), 0..=max_len)
}
