//! Document Store
//!
//! This crate abstracts the external system of record that the domain crates
//! read and write. Documents are schemaless records addressed by type + id.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Domains    │  ← users, notifications
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │ DocumentStore│  ← trait (get by id, insert with permission bypass)
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │  In-memory   │  ← development/testing backend
//! └──────────────┘
//! ```
//!
//! Lookup misses are `Ok(None)`, never errors. Store failures propagate to
//! callers unmodified.
//!
//! # Usage
//!
//! ```rust,no_run
//! use docstore::{DocumentStore, InMemoryDocumentStore};
//! use serde_json::Map;
//!
//! # async fn example() -> docstore::StoreResult<()> {
//! let store = InMemoryDocumentStore::new();
//! let id = store.insert_document("Note", Map::new(), false).await?;
//! let doc = store.get_document("Note", &id).await?;
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod memory;
pub mod store;

// Re-export commonly used types
pub use document::{truthy, Document};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryDocumentStore;
pub use store::DocumentStore;
