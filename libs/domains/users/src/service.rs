use std::sync::Arc;

use docstore::DocumentStore;

use crate::error::{UserError, UserResult};
use crate::models::UserData;

/// Doctype under which user documents live in the store.
const USER_DOCTYPE: &str = "User";

/// Service layer for user lookups
#[derive(Clone)]
pub struct UserService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Fetch a user and project it to [`UserData`].
    ///
    /// An empty id fails fast with [`UserError::MissingUserId`]; an unknown id
    /// is `Ok(None)`, not an error. Store failures propagate.
    pub async fn get_user_data(&self, user_id: &str) -> UserResult<Option<UserData>> {
        if user_id.is_empty() {
            return Err(UserError::MissingUserId);
        }

        let doc = self.store.get_document(USER_DOCTYPE, user_id).await?;

        match doc {
            Some(doc) => {
                tracing::debug!(user_id = %user_id, "Found user");
                Ok(Some(UserData::from_document(&doc)))
            }
            None => {
                tracing::debug!(user_id = %user_id, "User not found");
                Ok(None)
            }
        }
    }
}
