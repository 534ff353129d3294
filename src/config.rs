//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export LISTEN="0.0.0.0:8082"
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="secret"
//! ```
//!
//! ## Optional Variables
//!
//! - `STORAGE_PATH` - SQLite database file (default: `./storage/storage.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8082`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HTTP_USER` / `HTTP_PASSWORD` - Basic-auth credentials for the `/url` routes
//!   (both or neither)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)

use anyhow::Result;
use std::env;

use crate::api::middleware::auth::Credentials;

/// Default location of the SQLite database file.
pub const DEFAULT_STORAGE_PATH: &str = "./storage/storage.db";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_path: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub http_user: Option<String>,
    pub http_password: Option<String>,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this only fails on unparsable values.
    ///
    /// # Errors
    ///
    /// Returns an error if `DB_MAX_CONNECTIONS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let storage_path = Self::load_storage_path();
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8082".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let http_user = env::var("HTTP_USER").ok().filter(|v| !v.is_empty());
        let http_password = env::var("HTTP_PASSWORD").ok().filter(|v| !v.is_empty());

        let db_max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(v) => v.parse().map_err(|_| {
                anyhow::anyhow!("DB_MAX_CONNECTIONS must be a number, got '{}'", v)
            })?,
            Err(_) => 5,
        };

        Ok(Self {
            storage_path,
            listen_addr,
            log_level,
            log_format,
            http_user,
            http_password,
            db_max_connections,
        })
    }

    /// Returns `STORAGE_PATH`, falling back to [`DEFAULT_STORAGE_PATH`].
    pub fn load_storage_path() -> String {
        env::var("STORAGE_PATH")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - only one of `HTTP_USER` / `HTTP_PASSWORD` is set
    /// - `db_max_connections` is 0
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_user.is_some() != self.http_password.is_some() {
            anyhow::bail!("HTTP_USER and HTTP_PASSWORD must be set together");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Basic-auth credentials for the `/url` routes, if configured.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.http_user, &self.http_password) {
            (Some(user), Some(password)) => Some(Credentials::new(user, password)),
            _ => None,
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Pool size: {}", self.db_max_connections);

        if let Some(ref user) = self.http_user {
            tracing::info!("  Basic auth: {}:*** (enabled)", user);
        } else {
            tracing::info!("  Basic auth: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a value cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
