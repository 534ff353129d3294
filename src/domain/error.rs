//! Storage error kinds.

use thiserror::Error;

/// Errors returned by [`crate::domain::repositories::UrlRepository`].
///
/// Handlers match on the variant to tell "not found" and "already exists"
/// apart from unexpected failures; messages are never inspected.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The alias or the url is already stored.
    #[error("url exists")]
    UrlExists,

    /// No record matches the alias.
    #[error("url not found")]
    UrlNotFound,

    /// Any other database failure.
    #[error("storage.sqlite.{operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StorageError {
    /// Wraps a driver error with the name of the failing operation.
    pub fn database(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Database { operation, source }
    }
}
