//! In-memory document store.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use crate::store::DocumentStore;

/// In-memory implementation of [`DocumentStore`] (for development/testing).
///
/// Doctypes can be marked restricted; inserts into a restricted doctype are
/// rejected unless the caller passes `bypass_permissions = true`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<(String, String), Document>>>,
    restricted: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a doctype as requiring the permission bypass for inserts.
    pub async fn restrict_doctype(&self, doctype: impl Into<String>) {
        self.restricted.write().await.insert(doctype.into());
    }

    /// Put a document under a caller-chosen id, skipping permission checks.
    ///
    /// Seeding helper for tests and fixtures; regular inserts go through
    /// [`DocumentStore::insert_document`].
    pub async fn seed(
        &self,
        doctype: impl Into<String>,
        id: impl Into<String>,
        fields: Map<String, Value>,
    ) {
        let doctype = doctype.into();
        let id = id.into();
        let document = Document::new(doctype.clone(), id.clone(), fields);
        self.documents.write().await.insert((doctype, id), document);
    }

    /// Number of stored documents of the given doctype.
    pub async fn count(&self, doctype: &str) -> usize {
        let documents = self.documents.read().await;
        documents.keys().filter(|(dt, _)| dt == doctype).count()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(&self, doctype: &str, id: &str) -> StoreResult<Option<Document>> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(&(doctype.to_string(), id.to_string()))
            .cloned())
    }

    async fn insert_document(
        &self,
        doctype: &str,
        fields: Map<String, Value>,
        bypass_permissions: bool,
    ) -> StoreResult<String> {
        if !bypass_permissions && self.restricted.read().await.contains(doctype) {
            return Err(StoreError::PermissionDenied {
                doctype: doctype.to_string(),
            });
        }

        let id = Uuid::now_v7().to_string();
        let document = Document::new(doctype, id.clone(), fields);

        self.documents
            .write()
            .await
            .insert((doctype.to_string(), id.clone()), document);

        tracing::info!(doctype = %doctype, id = %id, bypass = bypass_permissions, "Inserted document");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get_document() {
        let store = InMemoryDocumentStore::new();

        let id = store
            .insert_document("Note", fields(json!({"body": "hello"})), false)
            .await
            .unwrap();
        assert!(!id.is_empty());

        let doc = store.get_document("Note", &id).await.unwrap().unwrap();
        assert_eq!(doc.doctype, "Note");
        assert_eq!(doc.str_field("body"), Some("hello"));
    }

    #[tokio::test]
    async fn test_get_document_miss_is_none() {
        let store = InMemoryDocumentStore::new();

        let doc = store.get_document("Note", "nope").await.unwrap();
        assert!(doc.is_none());
    }

    #[tokio::test]
    async fn test_restricted_doctype_requires_bypass() {
        let store = InMemoryDocumentStore::new();
        store.restrict_doctype("Notification").await;

        let denied = store
            .insert_document("Notification", Map::new(), false)
            .await;
        assert!(matches!(
            denied,
            Err(StoreError::PermissionDenied { .. })
        ));

        let id = store
            .insert_document("Notification", Map::new(), true)
            .await
            .unwrap();
        assert!(store.get_document("Notification", &id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_generated_ids_are_unique() {
        let store = InMemoryDocumentStore::new();

        let first = store.insert_document("Note", Map::new(), false).await.unwrap();
        let second = store.insert_document("Note", Map::new(), false).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.count("Note").await, 2);
    }

    #[tokio::test]
    async fn test_seeded_document_is_readable() {
        let store = InMemoryDocumentStore::new();
        store
            .seed("User", "u1", fields(json!({"email": "a@b.co"})))
            .await;

        let doc = store.get_document("User", "u1").await.unwrap().unwrap();
        assert_eq!(doc.id, "u1");
        assert_eq!(doc.str_field("email"), Some("a@b.co"));
    }
}
