//! The store seam consumed by the domain crates.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::document::Document;
use crate::error::StoreResult;

/// External system of record for structured documents.
///
/// Lookups return `Ok(None)` on a miss; only transport or permission failures
/// surface as errors.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document by type and id.
    async fn get_document(&self, doctype: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Persist a new document and return the store-assigned id.
    ///
    /// `bypass_permissions` skips the store's write checks for callers that
    /// create records on behalf of the system rather than a user.
    async fn insert_document(
        &self,
        doctype: &str,
        fields: Map<String, Value>,
        bypass_permissions: bool,
    ) -> StoreResult<String>;
}
