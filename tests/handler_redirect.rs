mod common;

use axum_test::TestServer;
use serde_json::json;
use url_alias::api::middleware::auth::Credentials;
use url_alias::routes::router;

#[tokio::test]
async fn test_redirect_success() {
    let (state, pool) = common::create_test_state(None).await;
    common::create_test_url(&pool, "redirect1", "https://example.com/target").await;
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _pool) = common::create_test_state(None).await;
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/nonexistent").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "not found" }));
}

#[tokio::test]
async fn test_redirect_is_public_with_credentials_configured() {
    let (state, pool) = common::create_test_state(Some(Credentials::new("admin", "secret"))).await;
    common::create_test_url(&pool, "open", "https://example.com/open").await;
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/open").await;

    assert_eq!(response.status_code(), 302);
}

#[tokio::test]
async fn test_redirect_after_delete() {
    let (state, pool) = common::create_test_state(None).await;
    common::create_test_url(&pool, "short", "https://example.com").await;
    let server = TestServer::new(router(state)).unwrap();

    server
        .delete("/url/short")
        .await
        .assert_json(&json!({ "status": "OK" }));

    server
        .get("/short")
        .await
        .assert_json(&json!({ "status": "Error", "error": "not found" }));
}

#[tokio::test]
async fn test_redirect_root_is_invalid_request() {
    let (state, _pool) = common::create_test_state(None).await;
    let server = common::app_server(state);

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "invalid request" }));
}

#[tokio::test]
async fn test_redirect_stored_url_with_line_break_is_internal_error() {
    let (state, pool) = common::create_test_state(None).await;
    // Written directly; the save endpoint rejects such urls.
    common::create_test_url(&pool, "broken", "https://exa\nmple.com").await;
    let server = common::app_server(state);

    let response = server.get("/broken").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "internal error" }));
}
