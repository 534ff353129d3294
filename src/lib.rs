//! # url-alias
//!
//! A small URL shortening service: long URLs are stored under short aliases
//! in SQLite, resolved with a `302` redirect and deleted on request.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, storage errors and the repository trait
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `POST /url` - `{"url": "...", "alias": "..."}` stores a url
//! - `GET /{alias}` - redirects to the stored url
//! - `DELETE /url/{alias}` - removes the alias
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::domain::StorageError;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
}
