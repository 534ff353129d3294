//! SQLite implementation of the url repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::error::StorageError;
use crate::domain::repositories::UrlRepository;
use crate::utils::db_error::is_unique_violation;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url (
        id INTEGER PRIMARY KEY,
        alias TEXT NOT NULL UNIQUE,
        url TEXT NOT NULL UNIQUE
    )
"#;

const CREATE_ALIAS_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)";

/// SQLite repository owning the `url` table.
///
/// Every call prepares and executes its own parameterized statement; statements
/// are not cached on the connection and no transactions are opened. Concurrent
/// writers are serialized by SQLite itself.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a repository over an existing pool and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if the schema statements fail.
    pub async fn new(pool: Arc<SqlitePool>) -> Result<Self, StorageError> {
        let repository = Self { pool };
        repository.init_schema().await?;
        Ok(repository)
    }

    /// Opens (creating if needed) the database file at `path` and initializes the schema.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if the file cannot be opened or the
    /// schema cannot be created.
    pub async fn connect(
        path: impl AsRef<Path>,
        max_connections: u32,
    ) -> Result<Self, StorageError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::database("connect", sqlx::Error::Io(e)))?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::database("connect", e))?;

        Self::new(Arc::new(pool)).await
    }

    /// Returns the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        self.pool.as_ref()
    }

    /// Lists stored records ordered by id, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] on database errors.
    pub async fn list(&self, limit: i64) -> Result<Vec<UrlRecord>, StorageError> {
        sqlx::query_as::<_, UrlRecord>("SELECT id, alias, url FROM url ORDER BY id LIMIT ?")
            .bind(limit)
            .persistent(false)
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::database("list", e))
    }

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] on database errors.
    pub async fn count(&self) -> Result<i64, StorageError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
            .persistent(false)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::database("count", e))
    }

    #[tracing::instrument(name = "storage.sqlite.init_schema", skip(self))]
    async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_TABLE)
            .persistent(false)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::database("init_schema", e))?;

        sqlx::query(CREATE_ALIAS_INDEX)
            .persistent(false)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::database("init_schema", e))?;

        tracing::debug!("schema ready");
        Ok(())
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    #[tracing::instrument(name = "storage.sqlite.save_url", skip(self, url))]
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias)
            .persistent(false)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StorageError::UrlExists
                } else {
                    StorageError::database("save_url", e)
                }
            })?;

        Ok(result.last_insert_rowid())
    }

    #[tracing::instrument(name = "storage.sqlite.get_url_by_alias", skip(self))]
    async fn get_url_by_alias(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .persistent(false)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::database("get_url_by_alias", e))?
            .ok_or(StorageError::UrlNotFound)
    }

    #[tracing::instrument(name = "storage.sqlite.delete_url_by_alias", skip(self))]
    async fn delete_url_by_alias(&self, alias: &str) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .persistent(false)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::database("delete_url_by_alias", e))?;

        match result.rows_affected() {
            0 => Err(StorageError::UrlNotFound),
            n => Ok(n),
        }
    }
}
