//! Entity identity: the application-defined key for records in a slice.
//!
//! A slice stores entities of one kind. Which field identifies an entity
//! is the application's choice (an external id, a token), not the store's.

use std::fmt;
use std::hash::Hash;

/// A record stored in a slice, keyed by an application-defined identity field.
///
/// The identity field is not necessarily unique within a slice; lookups
/// resolve duplicates by taking the first match in slice order.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The identity field's type.
    type Id: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    /// The value of this entity's identity field.
    fn identity(&self) -> &Self::Id;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Widget {
        serial: u32,
    }

    impl Entity for Widget {
        type Id = u32;

        fn identity(&self) -> &u32 {
            &self.serial
        }
    }

    #[test]
    fn test_identity_returns_the_declared_field() {
        let w = Widget { serial: 7 };
        assert_eq!(*w.identity(), 7);
    }
}
