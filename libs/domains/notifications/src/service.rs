//! Notification service for creating notification records.

use std::sync::Arc;

use core_config::{env_or_default, ConfigError, FromEnv};
use docstore::{DocumentStore, StoreError};
use tracing::info;

use crate::error::NotificationResult;
use crate::models::{Notification, Priority};

/// Doctype under which notification records are persisted.
const NOTIFICATION_DOCTYPE: &str = "Notification";

/// Configuration for the notification service.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Subject line for system notifications.
    pub subject: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            subject: env_or_default("NOTIFICATION_SUBJECT", "System Notification"),
        }
    }
}

impl FromEnv for NotificationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::default())
    }
}

/// Service for creating notifications.
#[derive(Clone)]
pub struct NotificationService<S: DocumentStore> {
    store: Arc<S>,
    config: NotificationConfig,
}

impl<S: DocumentStore> NotificationService<S> {
    /// Create a new notification service.
    pub fn new(store: S, config: NotificationConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    /// Create a notification service with the default config.
    pub fn with_default_config(store: S) -> Self {
        Self::new(store, NotificationConfig::default())
    }

    /// Create a notification for a user and return the store-assigned id.
    ///
    /// A missing or unknown priority silently normalizes to medium. The
    /// record is written with the permission bypass: notifications are
    /// created on behalf of the system, not the calling user.
    pub async fn create_notification(
        &self,
        recipient_id: &str,
        message: &str,
        priority: Option<&str>,
    ) -> NotificationResult<String> {
        let priority = priority
            .and_then(|p| p.parse::<Priority>().ok())
            .unwrap_or_default();

        let notification =
            Notification::system_alert(recipient_id, &self.config.subject, message, priority);

        let value = serde_json::to_value(&notification).map_err(StoreError::from)?;
        let fields = value.as_object().cloned().unwrap_or_default();

        let id = self
            .store
            .insert_document(NOTIFICATION_DOCTYPE, fields, true)
            .await?;

        info!(
            notification_id = %id,
            recipient_id = %recipient_id,
            priority = %priority,
            "Created notification"
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotificationError;
    use docstore::{Document, InMemoryDocumentStore, StoreResult};
    use serde_json::{Map, Value};
    use test_utils::TestDataBuilder;

    mockall::mock! {
        Store {}

        #[async_trait::async_trait]
        impl DocumentStore for Store {
            async fn get_document(&self, doctype: &str, id: &str) -> StoreResult<Option<Document>>;
            async fn insert_document(
                &self,
                doctype: &str,
                fields: Map<String, Value>,
                bypass_permissions: bool,
            ) -> StoreResult<String>;
        }
    }

    fn default_config() -> NotificationConfig {
        temp_env::with_var_unset("NOTIFICATION_SUBJECT", NotificationConfig::default)
    }

    #[tokio::test]
    async fn test_create_notification_returns_generated_id() {
        let store = InMemoryDocumentStore::new();
        let service = NotificationService::new(store, default_config());

        let id = service
            .create_notification("u1", "hi", Some("urgent"))
            .await
            .unwrap();

        assert!(!id.is_empty());
    }

    #[tokio::test]
    async fn test_created_record_fields() {
        let builder = TestDataBuilder::from_test_name("created_record_fields");
        let recipient = builder.name("user", "recipient");

        let store = InMemoryDocumentStore::new();
        let service =
            NotificationService::new(store.clone(), default_config());

        let id = service
            .create_notification(&recipient, "disk usage at 90%", Some("high"))
            .await
            .unwrap();

        let doc = store
            .get_document(NOTIFICATION_DOCTYPE, &id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(doc.str_field("recipient_id"), Some(recipient.as_str()));
        assert_eq!(doc.str_field("subject"), Some("System Notification"));
        assert_eq!(doc.str_field("body"), Some("disk usage at 90%"));
        assert_eq!(doc.str_field("notification_type"), Some("Alert"));
        assert_eq!(doc.str_field("related_doctype"), Some("User"));
        assert_eq!(doc.str_field("related_id"), Some(recipient.as_str()));
        assert_eq!(doc.str_field("priority"), Some("high"));
    }

    #[tokio::test]
    async fn test_unknown_priority_coerces_to_medium() {
        let store = InMemoryDocumentStore::new();
        let service =
            NotificationService::new(store.clone(), default_config());

        let id = service
            .create_notification("u1", "hi", Some("urgent"))
            .await
            .unwrap();

        let doc = store
            .get_document(NOTIFICATION_DOCTYPE, &id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc.str_field("priority"), Some("medium"));
    }

    #[tokio::test]
    async fn test_missing_priority_defaults_to_medium() {
        let store = InMemoryDocumentStore::new();
        let service =
            NotificationService::new(store.clone(), default_config());

        let id = service.create_notification("u1", "hi", None).await.unwrap();

        let doc = store
            .get_document(NOTIFICATION_DOCTYPE, &id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc.str_field("priority"), Some("medium"));
    }

    #[tokio::test]
    async fn test_insert_bypasses_write_restrictions() {
        let store = InMemoryDocumentStore::new();
        store.restrict_doctype(NOTIFICATION_DOCTYPE).await;

        let service =
            NotificationService::new(store.clone(), default_config());

        service.create_notification("u1", "hi", None).await.unwrap();
        assert_eq!(store.count(NOTIFICATION_DOCTYPE).await, 1);
    }

    #[tokio::test]
    async fn test_exactly_one_record_per_call() {
        let store = InMemoryDocumentStore::new();
        let service =
            NotificationService::new(store.clone(), default_config());

        service.create_notification("u1", "one", None).await.unwrap();
        service.create_notification("u2", "two", None).await.unwrap();

        assert_eq!(store.count(NOTIFICATION_DOCTYPE).await, 2);
    }

    #[tokio::test]
    async fn test_subject_honors_environment() {
        let config = temp_env::with_var(
            "NOTIFICATION_SUBJECT",
            Some("Ops Alert"),
            NotificationConfig::default,
        );

        let store = InMemoryDocumentStore::new();
        let service = NotificationService::new(store.clone(), config);

        let id = service.create_notification("u1", "hi", None).await.unwrap();

        let doc = store
            .get_document(NOTIFICATION_DOCTYPE, &id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc.str_field("subject"), Some("Ops Alert"));
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut store = MockStore::new();
        store
            .expect_insert_document()
            .returning(|_, _, _| Err(StoreError::Internal("write failed".to_string())));

        let service = NotificationService::new(store, default_config());
        let err = service
            .create_notification("u1", "hi", None)
            .await
            .unwrap_err();

        assert!(matches!(err, NotificationError::Store(_)));
    }
}
