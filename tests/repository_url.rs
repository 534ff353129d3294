mod common;

use url_alias::domain::StorageError;
use url_alias::domain::repositories::UrlRepository;
use url_alias::infrastructure::persistence::SqliteUrlRepository;

#[tokio::test]
async fn test_save_then_get() {
    let (repo, _pool) = common::test_repository().await;

    let id = repo.save_url("https://example.com", "ex").await.unwrap();
    assert_eq!(id, 1);

    let url = repo.get_url_by_alias("ex").await.unwrap();
    assert_eq!(url, "https://example.com");
}

#[tokio::test]
async fn test_ids_increase() {
    let (repo, _pool) = common::test_repository().await;

    let first = repo.save_url("https://a.example.com", "a").await.unwrap();
    let second = repo.save_url("https://b.example.com", "b").await.unwrap();

    assert!(second > first);
}

#[tokio::test]
async fn test_duplicate_alias_fails() {
    let (repo, pool) = common::test_repository().await;

    repo.save_url("https://example.com/1", "dup").await.unwrap();
    let result = repo.save_url("https://example.com/2", "dup").await;

    assert!(matches!(result, Err(StorageError::UrlExists)));
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[tokio::test]
async fn test_duplicate_url_fails() {
    let (repo, pool) = common::test_repository().await;

    repo.save_url("https://example.com", "first").await.unwrap();
    let result = repo.save_url("https://example.com", "second").await;

    assert!(matches!(result, Err(StorageError::UrlExists)));
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[tokio::test]
async fn test_get_unknown_alias() {
    let (repo, _pool) = common::test_repository().await;

    let result = repo.get_url_by_alias("never-used").await;

    assert!(matches!(result, Err(StorageError::UrlNotFound)));
}

#[tokio::test]
async fn test_delete_unknown_alias() {
    let (repo, _pool) = common::test_repository().await;

    let result = repo.delete_url_by_alias("never-used").await;

    assert!(matches!(result, Err(StorageError::UrlNotFound)));
}

#[tokio::test]
async fn test_delete_once() {
    let (repo, pool) = common::test_repository().await;
    common::create_test_url(&pool, "gone", "https://example.com").await;

    assert_eq!(repo.delete_url_by_alias("gone").await.unwrap(), 1);
    assert_eq!(common::count_urls(&pool).await, 0);

    let second = repo.delete_url_by_alias("gone").await;
    assert!(matches!(second, Err(StorageError::UrlNotFound)));
}

#[tokio::test]
async fn test_full_lifecycle() {
    let (repo, _pool) = common::test_repository().await;

    assert_eq!(repo.save_url("https://example.com", "ex").await.unwrap(), 1);
    assert_eq!(
        repo.get_url_by_alias("ex").await.unwrap(),
        "https://example.com"
    );
    assert_eq!(repo.delete_url_by_alias("ex").await.unwrap(), 1);
    assert!(matches!(
        repo.get_url_by_alias("ex").await,
        Err(StorageError::UrlNotFound)
    ));
}

#[tokio::test]
async fn test_deleted_url_can_be_saved_again() {
    let (repo, _pool) = common::test_repository().await;

    repo.save_url("https://example.com", "ex").await.unwrap();
    repo.delete_url_by_alias("ex").await.unwrap();

    assert!(repo.save_url("https://example.com", "ex").await.is_ok());
}

#[tokio::test]
async fn test_is_alias_exists() {
    let (repo, pool) = common::test_repository().await;
    common::create_test_url(&pool, "taken", "https://example.com").await;

    assert!(repo.is_alias_exists("taken").await.unwrap());
    assert!(!repo.is_alias_exists("free").await.unwrap());
}

#[tokio::test]
async fn test_is_alias_exists_propagates_failure() {
    let (repo, pool) = common::test_repository().await;
    pool.close().await;

    let result = repo.is_alias_exists("any").await;

    assert!(matches!(
        result,
        Err(StorageError::Database {
            operation: "get_url_by_alias",
            ..
        })
    ));
}

#[tokio::test]
async fn test_schema_init_is_idempotent() {
    let pool = common::test_pool().await;

    let first = SqliteUrlRepository::new(pool.clone()).await.unwrap();
    first.save_url("https://example.com", "ex").await.unwrap();

    let second = SqliteUrlRepository::new(pool).await.unwrap();
    assert_eq!(
        second.get_url_by_alias("ex").await.unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn test_alias_index_exists() {
    let (_repo, pool) = common::test_repository().await;

    let index: Option<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'index' AND name = 'idx_alias'",
    )
    .fetch_optional(pool.as_ref())
    .await
    .unwrap();

    assert_eq!(index.as_deref(), Some("idx_alias"));
}

#[tokio::test]
async fn test_list_and_count() {
    let (repo, _pool) = common::test_repository().await;

    repo.save_url("https://a.example.com", "a").await.unwrap();
    repo.save_url("https://b.example.com", "b").await.unwrap();
    repo.save_url("https://c.example.com", "c").await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 3);

    let records = repo.list(2).await.unwrap();
    let aliases: Vec<_> = records.iter().map(|r| r.alias.as_str()).collect();
    assert_eq!(aliases, vec!["a", "b"]);
    assert_eq!(records[0].url, "https://a.example.com");
}

#[tokio::test]
async fn test_connect_creates_file_and_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("storage.db");

    let repo = SqliteUrlRepository::connect(&path, 2).await.unwrap();
    repo.save_url("https://example.com", "ex").await.unwrap();

    assert!(path.exists());

    // Data survives reopening the same file.
    repo.pool().close().await;
    let reopened = SqliteUrlRepository::connect(&path, 2).await.unwrap();
    assert_eq!(
        reopened.get_url_by_alias("ex").await.unwrap(),
        "https://example.com"
    );
}
