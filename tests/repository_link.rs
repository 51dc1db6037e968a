//! PostgreSQL repository tests. Run with `cargo test -- --ignored` against a
//! database reachable through `DATABASE_URL`.

use quicklink::domain::entities::NewLink;
use quicklink::domain::repositories::{LinkRepository, StoreError};
use quicklink::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_link(short_id: &str, long_url: &str) -> NewLink {
    NewLink {
        short_id: short_id.to_string(),
        long_url: long_url.to_string(),
    }
}

async fn insert_link(pool: &PgPool, short_id: &str, long_url: &str) {
    sqlx::query("INSERT INTO links (short_id, long_url) VALUES ($1, $2)")
        .bind(short_id)
        .bind(long_url)
        .execute(pool)
        .await
        .unwrap();
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.create(new_link("test123", "https://example.com")).await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert_eq!(link.short_id, "test123");
    assert_eq!(link.long_url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_duplicate_short_id(pool: PgPool) {
    insert_link(&pool, "dup001", "https://example.com/first").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo
        .create(new_link("dup001", "https://example.com/second"))
        .await;

    assert!(matches!(result, Err(StoreError::DuplicateShortId(id)) if id == "dup001"));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_by_code(pool: PgPool) {
    insert_link(&pool, "abc123", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_code("abc123").await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert!(link.is_some());
    assert_eq!(link.unwrap().long_url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_code("notfound").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_by_code_is_case_sensitive(pool: PgPool) {
    insert_link(&pool, "AbC", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("abc").await.unwrap().is_none());
    assert!(repo.find_by_code("AbC").await.unwrap().is_some());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_by_long_url(pool: PgPool) {
    insert_link(&pool, "xyz789", "https://unique-url.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_long_url("https://unique-url.com").await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert!(link.is_some());
    assert_eq!(link.unwrap().short_id, "xyz789");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_count(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    assert_eq!(repo.count().await.unwrap(), 0);

    insert_link(&pool, "c1", "https://example.com/1").await;
    insert_link(&pool, "c2", "https://example.com/2").await;

    assert_eq!(repo.count().await.unwrap(), 2);
}
