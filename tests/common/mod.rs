#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use url_alias::api::middleware::auth::Credentials;
use url_alias::infrastructure::persistence::SqliteUrlRepository;
use url_alias::routes::app_router;
use url_alias::state::AppState;

/// Single-connection in-memory pool; every connection to `sqlite::memory:`
/// is a separate database, so the pool must never open a second one.
pub async fn test_pool() -> Arc<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    Arc::new(pool)
}

pub async fn test_repository() -> (SqliteUrlRepository, Arc<SqlitePool>) {
    let pool = test_pool().await;
    let repo = SqliteUrlRepository::new(pool.clone()).await.unwrap();
    (repo, pool)
}

pub async fn create_test_url(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_state(credentials: Option<Credentials>) -> (AppState, Arc<SqlitePool>) {
    let (repo, pool) = test_repository().await;
    (AppState::new(Arc::new(repo), credentials), pool)
}

/// Server over the full application service, trailing-slash trimming included.
pub fn app_server(state: AppState) -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}
