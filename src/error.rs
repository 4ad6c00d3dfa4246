//! Error types for petbase
//!
//! Provides a unified error type for all operations.
//!
//! Storage failures are split by direction (read vs. write) because the
//! caller's recovery differs: a failed read means the collection state is
//! unknown, a failed write means the previously persisted state is still
//! in effect and the in-memory view must not advance past it.

use thiserror::Error;

use crate::record::RecordId;
use crate::validate::ValidationErrors;

/// Result type alias using PetbaseError
pub type Result<T> = std::result::Result<T, PetbaseError>;

/// Unified error type for petbase operations
#[derive(Debug, Error)]
pub enum PetbaseError {
    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("storage read failed for key '{key}': {source}")]
    StorageRead {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage write failed for key '{key}': {source}")]
    StorageWrite {
        key: String,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    /// Persisted content under `key` exists but is not a valid collection.
    ///
    /// Distinct from an absent key, which reads as an empty collection.
    /// A corrupt document must never be masked as "empty".
    #[error("malformed collection under key '{key}': {reason}")]
    Decode { key: String, reason: String },

    #[error("failed to encode collection for key '{key}': {reason}")]
    Encode { key: String, reason: String },

    // -------------------------------------------------------------------------
    // Reconciliation Errors
    // -------------------------------------------------------------------------
    /// Update targeted an id that is not present in the collection.
    #[error("no record with id {id} in collection '{key}'")]
    NotFound { key: String, id: RecordId },

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    /// Per-field validation failures, raised before any storage IO.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
}
