//! Sample entity types for tests.
//!
//! Modeled on a small marketplace data set: users identified by an
//! external Google id, and book listings identified by a listing id.

use serde::{Deserialize, Serialize};
use vista_core::Entity;

/// Name of the users slice in test snapshots.
pub const USERS_SLICE: &str = "users";

/// Name of the listings slice in test snapshots.
pub const LISTINGS_SLICE: &str = "listings";

/// A user, identified by an external Google id rather than a store key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "googleId")]
    pub google_id: String,
    pub name: String,
}

impl Entity for User {
    type Id = String;

    fn identity(&self) -> &String {
        &self.google_id
    }
}

/// A book listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub listing_id: String,
    pub price: f64,
    pub condition: String,
    pub status: String,
    pub timestamp: i64,
}

impl Entity for Listing {
    type Id = String;

    fn identity(&self) -> &String {
        &self.listing_id
    }
}

impl Listing {
    /// A listing with placeholder detail fields, for tests that only
    /// care about identity.
    pub fn with_id(listing_id: impl Into<String>) -> Self {
        Self {
            listing_id: listing_id.into(),
            price: 0.0,
            condition: "good".to_string(),
            status: "available".to_string(),
            timestamp: 0,
        }
    }
}
