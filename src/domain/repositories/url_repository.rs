//! Repository trait for URL record storage.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for URL records.
///
/// The store owns identifier assignment and deduplication: the uniqueness of
/// `url` is enforced by the store itself, never by a lookup followed by an
/// insert in the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores `url` under a fresh id unless a record with this exact URL exists.
    ///
    /// Concurrent callers submitting the same URL observe exactly one new
    /// record; a uniqueness conflict is treated as "already exists".
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unavailable.
    async fn insert_if_absent(&self, url: &str) -> Result<(), AppError>;

    /// Finds the record for an exact URL.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn count(&self) -> Result<i64, AppError>;
}
