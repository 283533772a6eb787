//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching resolved `id -> url` mappings.
///
/// Records never change once stored, so entries never need invalidation and
/// only expire by TTL. Cache failures must degrade to store lookups.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the URL cached for a record id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    async fn get_url(&self, id: i64) -> CacheResult<Option<String>>;

    /// Stores a mapping with an optional TTL in seconds (implementation default if `None`).
    async fn set_url(&self, id: i64, url: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
