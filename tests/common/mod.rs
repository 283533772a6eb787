#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use radix_shortener::application::services::UrlService;
use radix_shortener::domain::entities::UrlRecord;
use radix_shortener::domain::repositories::UrlRepository;
use radix_shortener::error::AppError;
use radix_shortener::infrastructure::cache::NullCache;
use radix_shortener::infrastructure::persistence::{InMemoryUrlRepository, PgUrlRepository};
use radix_shortener::routes::router;
use radix_shortener::state::AppState;
use radix_shortener::web::static_fallback;

pub const BASE_URL: &str = "https://s.example.com/";

pub fn static_dir() -> String {
    format!("{}/static", env!("CARGO_MANIFEST_DIR"))
}

pub fn create_state(repository: Arc<dyn UrlRepository>) -> AppState {
    let url_service = Arc::new(UrlService::new(repository, BASE_URL));

    AppState::new(url_service, Arc::new(NullCache::new()), static_fallback(static_dir()))
}

pub fn create_memory_state() -> AppState {
    create_state(Arc::new(InMemoryUrlRepository::new()))
}

/// Store whose every operation fails, as an unreachable database would.
pub struct FailingUrlRepository;

fn store_down() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl UrlRepository for FailingUrlRepository {
    async fn insert_if_absent(&self, _url: &str) -> Result<(), AppError> {
        Err(store_down())
    }

    async fn find_by_url(&self, _url: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(store_down())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<UrlRecord>, AppError> {
        Err(store_down())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(store_down())
    }
}

pub fn create_failing_state() -> AppState {
    create_state(Arc::new(FailingUrlRepository))
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    create_state(Arc::new(PgUrlRepository::new(Arc::new(pool))))
}

pub fn create_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn insert_url(pool: &PgPool, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (url) VALUES ($1) RETURNING id")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}
