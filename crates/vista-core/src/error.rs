//! Error types for the core snapshot model.

use thiserror::Error;

/// Errors that can occur when reading a snapshot.
///
/// Both variants are contract violations by the snapshot's assembler,
/// not expected runtime outcomes: "entity not found" is represented by
/// absence in derivation results, never by these errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The named slice is not registered in the snapshot.
    #[error("missing slice: {0}")]
    MissingSlice(String),

    /// The named slice is registered under a different entity type.
    #[error("slice {slice} is not a slice of {expected}")]
    SliceTypeMismatch {
        slice: String,
        expected: &'static str,
    },
}

/// Result type for snapshot operations.
pub type Result<T> = std::result::Result<T, SnapshotError>;
