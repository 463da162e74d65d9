use docstore::Document;
use serde::{Deserialize, Serialize};

/// Four-field projection of a stored user document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    /// Store id of the user document.
    pub id: String,
    pub email: String,
    pub full_name: String,
    /// Whether the account is enabled.
    pub enabled: bool,
}

impl UserData {
    /// Project a user document down to the four exposed fields.
    ///
    /// Missing fields default rather than error; the store schema is open.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            email: doc.str_field("email").unwrap_or_default().to_string(),
            full_name: doc.str_field("full_name").unwrap_or_default().to_string(),
            enabled: doc.bool_field("enabled"),
        }
    }
}

/// Reshaped record produced by [`crate::filter_active_users`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// The record's `name` field, when present.
    pub id: Option<String>,
    pub email: String,
    /// `full_name` when present and non-empty, otherwise the `name` field.
    pub display_name: Option<String>,
}
