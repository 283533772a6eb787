#![cfg(feature = "postgres-tests")]

mod common;

use sqlx::PgPool;
use std::sync::Arc;
use radix_shortener::domain::repositories::UrlRepository;
use radix_shortener::infrastructure::persistence::PgUrlRepository;

#[sqlx::test]
async fn test_insert_and_find_by_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert_if_absent("https://example.com/a").await.unwrap();

    let record = repo.find_by_url("https://example.com/a").await.unwrap();
    assert!(record.is_some());
    let record = record.unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(record.url, "https://example.com/a");
}

#[sqlx::test]
async fn test_insert_is_idempotent(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    repo.insert_if_absent("https://example.com/a").await.unwrap();
    repo.insert_if_absent("https://example.com/a").await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_repeated_insert_does_not_skip_ids(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert_if_absent("https://example.com/a").await.unwrap();
    repo.insert_if_absent("https://example.com/a").await.unwrap();
    repo.insert_if_absent("https://example.com/b").await.unwrap();

    let b = repo.find_by_url("https://example.com/b").await.unwrap().unwrap();
    assert_eq!(b.id, 2);
}

#[sqlx::test]
async fn test_find_by_url_is_exact(pool: PgPool) {
    common::insert_url(&pool, "https://example.com/a").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.find_by_url("https://example.com/A").await.unwrap().is_none());
    assert!(repo.find_by_url("https://example.com/a/").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = common::insert_url(&pool, "https://example.com/target").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo.find_by_id(id).await.unwrap();
    assert_eq!(record.unwrap().url, "https://example.com/target");
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.find_by_id(46655).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_concurrent_inserts_create_one_record(pool: PgPool) {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool)));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.insert_if_absent("https://example.com/race").await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.count().await.unwrap(), 1);
}
