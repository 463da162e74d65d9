//! Error types for the notifications domain.

use docstore::StoreError;
use thiserror::Error;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Errors that can occur in the notifications domain.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Store failure, propagated unmodified.
    #[error(transparent)]
    Store(#[from] StoreError),
}
