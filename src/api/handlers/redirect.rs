//! Handler for alias resolution.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::api::middleware::request_id::RequestId;
use crate::domain::StorageError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored url.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// `GET /` is routed here too and answered as an empty alias.
///
/// # Response
///
/// `302 Found` with a `Location` header pointing at the stored url.
///
/// # Errors
///
/// - `invalid request` - empty alias
/// - `not found` - unknown alias
/// - `internal error` - any other storage failure
#[tracing::instrument(name = "handler.redirect", skip_all, fields(request_id = %request_id))]
pub async fn redirect_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    alias: Option<Path<String>>,
) -> Result<Response, AppError> {
    let alias = alias.map(|Path(alias)| alias).unwrap_or_default();
    if alias.is_empty() {
        info!("alias is empty");
        return Err(AppError::InvalidRequest);
    }

    let url = match state.urls.get_url_by_alias(&alias).await {
        Ok(url) => url,
        Err(StorageError::UrlNotFound) => {
            info!(alias = %alias, "url not found");
            return Err(AppError::NotFound);
        }
        Err(err) => {
            error!(error = %err, alias = %alias, "failed to get url");
            return Err(AppError::Internal);
        }
    };

    let location = HeaderValue::try_from(url.as_str()).map_err(|err| {
        error!(error = %err, alias = %alias, "stored url is not a valid Location header");
        AppError::Internal
    })?;

    info!(alias = %alias, url = %url, "got url");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
