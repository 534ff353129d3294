//! Repository trait for alias/url storage.

use crate::domain::error::StorageError;
use async_trait::async_trait;

/// Storage capability the HTTP handlers depend on.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores `url` under `alias` and returns the new record id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlExists`] if the alias or the url is already stored.
    ///
    /// Returns [`StorageError::Database`] on any other failure.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError>;

    /// Returns the url stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] if no record matches.
    ///
    /// Returns [`StorageError::Database`] on any other failure.
    async fn get_url_by_alias(&self, alias: &str) -> Result<String, StorageError>;

    /// Deletes the record stored under `alias` and returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] if nothing was deleted.
    ///
    /// Returns [`StorageError::Database`] on any other failure.
    async fn delete_url_by_alias(&self, alias: &str) -> Result<u64, StorageError>;

    /// Reports whether `alias` is taken.
    ///
    /// `Ok(false)` when the alias is unknown, `Ok(true)` when a record exists.
    /// Any other failure is propagated unchanged, never paired with a value.
    async fn is_alias_exists(&self, alias: &str) -> Result<bool, StorageError> {
        match self.get_url_by_alias(alias).await {
            Ok(_) => Ok(true),
            Err(StorageError::UrlNotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
