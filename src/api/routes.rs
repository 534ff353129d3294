//! API route configuration.
//!
//! The `/url` routes are wrapped by [`crate::api::middleware::auth`] in
//! [`crate::routes::router`]; the gate is a no-op when no credentials are configured.

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Mutating routes.
///
/// # Endpoints
///
/// - `POST   /url`          - Store a url under an alias
/// - `DELETE /url/{alias}`  - Delete the record stored under an alias
///
/// `DELETE /url` has no alias segment and gets an `invalid request` envelope.
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler).delete(delete_handler))
        .route("/url/{alias}", delete(delete_handler))
}
