//! Domain layer: entities, storage errors and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`error`] - Closed set of storage error kinds
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the infrastructure or API layers.

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::StorageError;
