//! Generic REST CRUD routes for Sea-ORM models on an Axum router.
//!
//! Implement [`RestResource`] for a model, then bind it under a path:
//!
//! ```rust,ignore
//! let app = restorm::bind::<user::Model, ()>(Router::new(), "users", &db);
//! ```
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | POST | `/users` | saved model |
//! | GET | `/users` | array of models |
//! | GET | `/users/{id}` | model |
//! | PUT | `/users/{id}` | `true` |
//! | DELETE | `/users/{id}` | `true` |
//!
//! Failures answer with an [`ErrorPayload`].

pub mod binder;
pub mod body;
pub mod errors;
pub mod models;
pub mod openapi;
pub mod pagination;
pub mod path;
pub mod routes;
pub mod traits;

pub use binder::{Binder, bind, try_bind};
pub use errors::{ApiError, BindError, ErrorKind, ErrorPayload};
pub use models::{BindOptions, ListQuery, UpdateMode};
pub use path::CollectionPath;
pub use traits::RestResource;
