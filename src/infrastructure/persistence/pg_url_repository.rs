//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_url;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    url: String,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.id, row.url)
    }
}

/// PostgreSQL repository for URL records.
///
/// Deduplication relies on the `urls_url_key` unique constraint. The insert
/// only draws from the id sequence when no row exists yet, so repeated
/// submissions do not leave gaps in the id space.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert_if_absent(&self, url: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO urls (url)
            SELECT $1::text
            WHERE NOT EXISTS (SELECT 1 FROM urls WHERE url = $1)
            ON CONFLICT (url) DO NOTHING
            "#,
        )
        .bind(url)
        .execute(self.pool.as_ref())
        .await;

        match result {
            Ok(done) => {
                if done.rows_affected() > 0 {
                    debug!("Inserted new URL record");
                }
                Ok(())
            }
            Err(e) if is_unique_violation_on_url(&e) => {
                debug!("URL inserted concurrently, treating as existing");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>("SELECT id, url FROM urls WHERE url = $1")
            .bind(url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>("SELECT id, url FROM urls WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
