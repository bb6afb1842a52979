//! Error types for the derivation layer.

use thiserror::Error;
use vista_core::SnapshotError;

/// Errors that can occur while computing a derivation.
///
/// "Entity not found" never appears here: absence is part of the
/// derivation's result, not a failure.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The snapshot did not satisfy the derivation's slice contract.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Result type for derivation operations.
pub type Result<T> = std::result::Result<T, SelectError>;
