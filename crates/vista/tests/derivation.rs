//! Derivation-layer properties: subset keys, identity agreement,
//! absence handling, idempotence, and per-site cache scope.

use std::sync::Arc;

use proptest::prelude::*;

use vista::{Entity, EntityLookup, EntitySetLookup, Snapshot};
use vista_testkit::{generators, snapshot_with, Listing, User, LISTINGS_SLICE, USERS_SLICE};

#[test]
fn single_lookup_finds_alice_by_google_id() {
    let snapshot = snapshot_with(
        vec![User {
            google_id: "u1".to_string(),
            name: "Alice".to_string(),
        }],
        vec![],
    );

    let mut lookup = EntityLookup::<User>::new(USERS_SLICE);
    let alice = lookup.select(&snapshot, &"u1".to_string()).unwrap().unwrap();
    assert_eq!(alice.name, "Alice");

    assert!(lookup.select(&snapshot, &"u9".to_string()).unwrap().is_none());
}

#[test]
fn set_lookup_restricts_to_present_ids() {
    let snapshot = snapshot_with(
        vec![],
        vec![Listing::with_id("L1"), Listing::with_id("L2")],
    );

    let mut lookup = EntitySetLookup::<Listing>::new(LISTINGS_SLICE);
    let result = lookup
        .select(&snapshot, &["L1".to_string(), "L3".to_string()])
        .unwrap();

    assert_eq!(result.len(), 1);
    assert!(result.contains_key("L1"));
    assert!(!result.contains_key("L3"));
}

#[test]
fn lookups_over_the_same_slice_keep_independent_caches() {
    let snapshot = snapshot_with(
        vec![],
        vec![Listing::with_id("L1"), Listing::with_id("L2")],
    );

    let mut site_a = EntitySetLookup::<Listing>::new(LISTINGS_SLICE);
    let mut site_b = EntitySetLookup::<Listing>::new(LISTINGS_SLICE);

    let a_first = site_a.select(&snapshot, &["L1".to_string()]).unwrap();
    let b_first = site_b.select(&snapshot, &["L2".to_string()]).unwrap();

    // Interleaved use of the other site must not evict either cache.
    let a_second = site_a.select(&snapshot, &["L1".to_string()]).unwrap();
    let b_second = site_b.select(&snapshot, &["L2".to_string()]).unwrap();

    assert!(Arc::ptr_eq(&a_first, &a_second));
    assert!(Arc::ptr_eq(&b_first, &b_second));
}

#[test]
fn derivation_does_not_disturb_the_snapshot() {
    let snapshot = snapshot_with(vec![], vec![Listing::with_id("L1")]);
    let before = snapshot.get_slice::<Listing>(LISTINGS_SLICE).unwrap();

    let mut lookup = EntitySetLookup::<Listing>::new(LISTINGS_SLICE);
    lookup.select(&snapshot, &["L1".to_string()]).unwrap();

    let after = snapshot.get_slice::<Listing>(LISTINGS_SLICE).unwrap();
    assert!(before.same_storage(&after));
    assert_eq!(before.entities(), after.entities());
}

proptest! {
    #[test]
    fn prop_set_lookup_keys_subset_of_request(
        listings in generators::listings(8),
        ids in generators::id_list(8),
    ) {
        let snapshot = Snapshot::builder()
            .slice(LISTINGS_SLICE, listings)
            .build();

        let mut lookup = EntitySetLookup::<Listing>::new(LISTINGS_SLICE);
        let result = lookup.select(&snapshot, &ids).unwrap();

        for (key, listing) in result.iter() {
            prop_assert!(ids.contains(key));
            prop_assert_eq!(listing.identity(), key);
        }
    }

    #[test]
    fn prop_single_lookup_absent_for_unknown_ids(
        users in generators::users(8),
        probe in generators::entity_id(),
    ) {
        let present = users.iter().any(|u| u.google_id == probe);
        let snapshot = Snapshot::builder().slice(USERS_SLICE, users).build();

        let mut lookup = EntityLookup::<User>::new(USERS_SLICE);
        let result = lookup.select(&snapshot, &probe).unwrap();

        prop_assert_eq!(result.is_some(), present);
        if let Some(user) = result {
            prop_assert_eq!(&user.google_id, &probe);
        }
    }

    #[test]
    fn prop_unchanged_inputs_are_idempotent_and_cached(
        listings in generators::listings(8),
        ids in generators::id_list(8),
    ) {
        let snapshot = Snapshot::builder()
            .slice(LISTINGS_SLICE, listings)
            .build();

        let mut lookup = EntitySetLookup::<Listing>::new(LISTINGS_SLICE);
        let first = lookup.select(&snapshot, &ids).unwrap();
        let second = lookup.select(&snapshot, &ids).unwrap();

        prop_assert!(Arc::ptr_eq(&first, &second));
        prop_assert_eq!(&*first, &*second);
    }
}
