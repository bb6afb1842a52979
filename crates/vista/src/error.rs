//! Error types for the unified API.

use thiserror::Error;
use vista_core::SnapshotError;
use vista_select::SelectError;

/// Errors that can occur through the unified API.
#[derive(Debug, Error)]
pub enum VistaError {
    /// Derivation error.
    #[error("derivation error: {0}")]
    Select(#[from] SelectError),

    /// Snapshot contract violation.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Result type for unified API operations.
pub type Result<T> = std::result::Result<T, VistaError>;
