//! Handler for the save endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::{SaveRequest, SaveResponse};
use crate::api::middleware::request_id::RequestId;
use crate::domain::StorageError;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::random::{ALIAS_LENGTH, new_random_string};

/// Stores a url under a client-supplied or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "ex" }
/// ```
///
/// `alias` is optional; when absent or empty a random
/// [`ALIAS_LENGTH`]-character alphanumeric alias is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex" }
/// ```
///
/// # Errors
///
/// - `failed to decode request` - body is not valid JSON for this shape
/// - `field URL is ...` - validation failures
/// - `alias already exists` - the supplied alias is taken
/// - `url already exists` - the url (or alias) is already stored
/// - `internal error` - any other storage failure
#[tracing::instrument(name = "handler.url.save", skip_all, fields(request_id = %request_id))]
pub async fn save_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        error!(error = %e, "failed to decode request body");
        AppError::Decode
    })?;

    info!(?payload, "request body decoded");

    if let Err(errors) = payload.validate() {
        info!(error = %errors, "invalid request");
        return Err(errors.into());
    }

    let SaveRequest { url, alias } = payload;
    let url = url.ok_or(AppError::InvalidRequest)?;

    let alias = match alias.filter(|a| !a.is_empty()) {
        Some(alias) => {
            ensure_alias_free(&state, &alias).await?;
            alias
        }
        None => new_random_string(ALIAS_LENGTH),
    };

    match state.urls.save_url(&url, &alias).await {
        Ok(id) => {
            info!(id, alias = %alias, "url added");
            Ok(Json(SaveResponse::new(alias)))
        }
        Err(StorageError::UrlExists) => {
            info!(url = %url, "url already exists");
            Err(AppError::UrlExists)
        }
        Err(err) => {
            error!(error = %err, alias = %alias, "failed to add url");
            Err(AppError::Internal)
        }
    }
}

async fn ensure_alias_free(state: &AppState, alias: &str) -> Result<(), AppError> {
    match state.urls.is_alias_exists(alias).await {
        Ok(false) => Ok(()),
        Ok(true) => {
            info!(alias, "alias already exists");
            Err(AppError::AliasExists)
        }
        Err(err) => {
            error!(error = %err, alias, "failed to check alias");
            Err(AppError::Internal)
        }
    }
}
