//! Users Domain
//!
//! Read-side user operations against the document store.
//!
//! # Features
//!
//! - User lookup by id with a four-field projection
//! - Email format validation
//! - Filtering loosely-shaped user records down to enabled, reachable users
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← lookup, fail-fast input checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  DocStore   │  ← external system of record (trait)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← projections, summaries
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use docstore::InMemoryDocumentStore;
//! use domain_users::UserService;
//!
//! # async fn example() -> domain_users::UserResult<()> {
//! let store = InMemoryDocumentStore::new();
//! let service = UserService::new(store);
//!
//! let user = service.get_user_data("some-user-id").await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod models;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use filter::filter_active_users;
pub use models::{UserData, UserSummary};
pub use service::UserService;
pub use validation::validate_email;
