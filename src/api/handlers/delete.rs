//! Handler for alias deletion.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{error, info};

use crate::api::dto::ApiResponse;
use crate::api::middleware::request_id::RequestId;
use crate::domain::StorageError;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the record stored under an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// `DELETE /url` (and `DELETE /url/` once the trailing slash is trimmed) is
/// routed here too and answered as an empty alias.
///
/// # Response
///
/// ```json
/// { "status": "OK" }
/// ```
///
/// The number of deleted rows is logged as `rows_deleted`.
///
/// # Errors
///
/// - `invalid request` - empty alias
/// - `not found` - unknown alias
/// - `internal error` - any other storage failure
#[tracing::instrument(name = "handler.url.delete", skip_all, fields(request_id = %request_id))]
pub async fn delete_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    alias: Option<Path<String>>,
) -> Result<Json<ApiResponse>, AppError> {
    let alias = alias.map(|Path(alias)| alias).unwrap_or_default();
    if alias.is_empty() {
        info!("alias is empty");
        return Err(AppError::InvalidRequest);
    }

    let rows_deleted = match state.urls.delete_url_by_alias(&alias).await {
        Ok(rows) => rows,
        Err(StorageError::UrlNotFound) => {
            info!(alias = %alias, "url not found");
            return Err(AppError::NotFound);
        }
        Err(err) => {
            error!(error = %err, alias = %alias, "failed to delete url by alias");
            return Err(AppError::Internal);
        }
    };

    info!(alias = %alias, rows_deleted, "url deleted");

    Ok(Json(ApiResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use axum::{Router, routing::delete};
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::Arc;

    fn server(mock: MockUrlRepository) -> TestServer {
        let state = AppState::new(Arc::new(mock), None);
        let app = Router::new()
            .route("/url", delete(delete_handler))
            .route("/url/{alias}", delete(delete_handler))
            .with_state(state);

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut mock = MockUrlRepository::new();
        mock.expect_delete_url_by_alias()
            .withf(|alias| alias == "ex")
            .times(1)
            .returning(|_| Ok(1));

        let response = server(mock).delete("/url/ex").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "OK" }));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut mock = MockUrlRepository::new();
        mock.expect_delete_url_by_alias()
            .times(1)
            .returning(|_| Err(StorageError::UrlNotFound));

        let response = server(mock).delete("/url/missing").await;

        response.assert_json(&json!({ "status": "Error", "error": "not found" }));
    }

    #[tokio::test]
    async fn test_delete_storage_failure() {
        let mut mock = MockUrlRepository::new();
        mock.expect_delete_url_by_alias().times(1).returning(|_| {
            Err(StorageError::database(
                "delete_url_by_alias",
                sqlx::Error::PoolClosed,
            ))
        });

        let response = server(mock).delete("/url/ex").await;

        response.assert_json(&json!({ "status": "Error", "error": "internal error" }));
    }

    #[tokio::test]
    async fn test_delete_empty_alias() {
        let mut mock = MockUrlRepository::new();
        mock.expect_delete_url_by_alias().never();
        let state = AppState::new(Arc::new(mock), None);

        let result = delete_handler(
            State(state),
            RequestId("test".to_string()),
            Some(Path(String::new())),
        )
        .await;

        assert!(matches!(result, Err(AppError::InvalidRequest)));
    }

    #[tokio::test]
    async fn test_delete_without_alias_segment() {
        let mut mock = MockUrlRepository::new();
        mock.expect_delete_url_by_alias().never();

        let response = server(mock).delete("/url").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "Error", "error": "invalid request" }));
    }
}
