//! Notifications Domain
//!
//! Creation of user-facing notification records through the document store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ NotificationSvc │  ← normalizes priority, builds the record
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │    DocStore     │  ← persists with permission bypass, assigns the id
//! └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use docstore::InMemoryDocumentStore;
//! use domain_notifications::{NotificationConfig, NotificationService};
//!
//! # async fn example() -> domain_notifications::NotificationResult<()> {
//! let store = InMemoryDocumentStore::new();
//! let service = NotificationService::new(store, NotificationConfig::default());
//!
//! let id = service.create_notification("u1", "disk usage at 90%", Some("high")).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{NotificationError, NotificationResult};
pub use models::{Notification, Priority};
pub use service::{NotificationConfig, NotificationService};
