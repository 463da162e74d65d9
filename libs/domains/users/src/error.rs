use docstore::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    /// A user id is required but was empty or absent.
    #[error("User ID is required")]
    MissingUserId,

    /// Store failure, propagated unmodified.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type UserResult<T> = Result<T, UserError>;
