//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::api::middleware::auth::Credentials;
use crate::domain::repositories::UrlRepository;

/// State shared by all handlers.
///
/// Holds the storage backend behind the [`UrlRepository`] trait so tests can
/// substitute a mock. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub urls: Arc<dyn UrlRepository>,
    /// Basic-auth credentials for the `/url` routes; `None` leaves them open.
    pub credentials: Option<Credentials>,
}

impl AppState {
    pub fn new(urls: Arc<dyn UrlRepository>, credentials: Option<Credentials>) -> Self {
        Self { urls, credentials }
    }
}
