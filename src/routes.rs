//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Redirect to the stored url (public)
//! - `GET    /`             - Empty alias, answered with `invalid request`
//! - `POST   /url`          - Save a url (basic auth when configured)
//! - `DELETE /url/{alias}`  - Delete an alias (basic auth when configured)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` generated when absent and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Basic auth on the `/url` routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{auth, request_id, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    let url_router = api::routes::url_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/", get(redirect_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(url_router)
        .with_state(state)
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}

/// Constructs the application service: [`router`] wrapped in trailing-slash trimming.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
