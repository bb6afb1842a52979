//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a sample data set loaded
//! from JSON, snapshot builders, and a requester that records every
//! dispatch so tests can count them.

use std::sync::Mutex;

use vista_core::Snapshot;
use vista_surface::{FetchRequest, FetchRequester};

use crate::entities::{Listing, User, LISTINGS_SLICE, USERS_SLICE};

/// Sample data set: two users and three listings.
const SAMPLE_DATA: &str = r#"{
  "users": [
    { "googleId": "u1", "name": "Alice" },
    { "googleId": "u2", "name": "Bob" }
  ],
  "listings": [
    { "listing_id": "L1", "price": 24.99, "condition": "good", "status": "available", "timestamp": 1554076800 },
    { "listing_id": "L2", "price": 8.5, "condition": "fair", "status": "available", "timestamp": 1554163200 },
    { "listing_id": "L3", "price": 40.0, "condition": "new", "status": "sold", "timestamp": 1554249600 }
  ]
}"#;

#[derive(serde::Deserialize)]
struct SampleData {
    users: Vec<User>,
    listings: Vec<Listing>,
}

/// The sample users.
pub fn sample_users() -> Vec<User> {
    parse_sample().users
}

/// The sample listings.
pub fn sample_listings() -> Vec<Listing> {
    parse_sample().listings
}

/// A snapshot holding the full sample data set under the standard
/// slice names.
pub fn sample_snapshot() -> Snapshot {
    let data = parse_sample();
    Snapshot::builder()
        .slice(USERS_SLICE, data.users)
        .slice(LISTINGS_SLICE, data.listings)
        .build()
}

/// A snapshot with the standard slice names but caller-chosen contents.
pub fn snapshot_with(users: Vec<User>, listings: Vec<Listing>) -> Snapshot {
    Snapshot::builder()
        .slice(USERS_SLICE, users)
        .slice(LISTINGS_SLICE, listings)
        .build()
}

fn parse_sample() -> SampleData {
    serde_json::from_str(SAMPLE_DATA).expect("sample data is valid JSON")
}

/// A requester that records every request it receives.
///
/// Used to assert dispatch counts, in particular that mounting a surface
/// dispatches exactly one fetch request.
#[derive(Default)]
pub struct RecordingRequester<Id> {
    requests: Mutex<Vec<FetchRequest<Id>>>,
}

impl<Id: Clone> RecordingRequester<Id> {
    /// A requester with no recorded requests.
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of requests dispatched so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// All requests dispatched so far, in dispatch order.
    pub fn requests(&self) -> Vec<FetchRequest<Id>> {
        self.requests.lock().unwrap().clone()
    }
}

impl<Id: Clone + Send + Sync + 'static> FetchRequester<Id> for RecordingRequester<Id> {
    fn request_entities(&self, request: FetchRequest<Id>) {
        self.requests.lock().unwrap().push(request);
    }
}
