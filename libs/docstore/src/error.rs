//! Error types for the document store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in the document store.
///
/// A lookup miss is not an error; `get_document` returns `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert rejected by the store's write checks.
    #[error("Inserting into '{doctype}' requires elevated permissions")]
    PermissionDenied { doctype: String },

    /// Document fields could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend failure.
    #[error("Store error: {0}")]
    Internal(String),
}
