//! URL shortening and resolution service.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, info, warn};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::token;
use crate::utils::url_check::check_http_url;

/// Delay before the single re-read that covers a lagging store.
const LOOKUP_RETRY_DELAY: Duration = Duration::from_millis(25);

/// Result of a successful shortening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub record: UrlRecord,
    pub token: String,
    pub short_url: String,
}

enum LookupFailure {
    Missing,
    Store(AppError),
}

/// Service for shortening URLs and resolving tokens.
///
/// Shortening is insert-if-absent followed by a lookup by URL, so a URL that
/// is already stored gets its existing token back. The store is injected and
/// shared; the service itself holds no mutable state.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    base_url: String,
    strict_validation: bool,
}

impl UrlService {
    /// Creates a new service.
    ///
    /// `base_url` is prepended verbatim to tokens and should end with `/`
    /// (see [`crate::utils::url_check::normalize_base_url`]).
    pub fn new(repository: Arc<dyn UrlRepository>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
            strict_validation: false,
        }
    }

    /// Requires submitted URLs to be absolute `http`/`https` URLs.
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    /// Returns the short URL for `url`, storing it first if it is new.
    ///
    /// The URL is stored exactly as submitted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty (or, in strict
    /// mode, not an absolute http(s) URL). Nothing is written in that case.
    ///
    /// Returns [`AppError::Internal`] if the store fails, or if the record is
    /// still not visible after one retried lookup.
    pub async fn shorten(&self, url: &str) -> Result<ShortenedUrl, AppError> {
        self.check_submission(url)?;

        self.repository.insert_if_absent(url).await?;

        let record = self.find_inserted(url).await?;
        let token = record.token();
        let short_url = self.short_url_for(&token);

        info!(id = record.id, token = %token, "URL shortened");

        Ok(ShortenedUrl {
            record,
            token,
            short_url,
        })
    }

    /// Resolves a token to its stored record.
    ///
    /// Tokens that do not decode to a valid record id resolve to `None`, the
    /// same as ids that were never issued.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, token: &str) -> Result<Option<UrlRecord>, AppError> {
        match Self::parse_token(token) {
            Some(id) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Looks up a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Decodes a token into a store id.
    ///
    /// Returns `None` for malformed tokens and for values no store id can
    /// take (`0` and anything above `i64::MAX`).
    pub fn parse_token(token: &str) -> Option<i64> {
        match token::decode(token) {
            Ok(value) => i64::try_from(value).ok().filter(|id| *id > 0),
            Err(e) => {
                debug!(token, "Unresolvable token: {}", e);
                None
            }
        }
    }

    /// Builds the public short URL for a token.
    pub fn short_url_for(&self, token: &str) -> String {
        format!("{}{}", self.base_url, token)
    }

    fn check_submission(&self, url: &str) -> Result<(), AppError> {
        if url.trim().is_empty() {
            return Err(AppError::bad_request(
                "URL must not be empty",
                json!({ "field": "url" }),
            ));
        }

        if self.strict_validation {
            check_http_url(url).map_err(|e| {
                AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
            })?;
        }

        Ok(())
    }

    /// Reads back the record after insertion, retrying a miss once.
    async fn find_inserted(&self, url: &str) -> Result<UrlRecord, AppError> {
        let strategy = FixedInterval::new(LOOKUP_RETRY_DELAY).take(1);

        let lookup = move || async move {
            match self.repository.find_by_url(url).await {
                Ok(Some(record)) => Ok(record),
                Ok(None) => {
                    warn!("Record not visible right after insert");
                    Err(LookupFailure::Missing)
                }
                Err(e) => Err(LookupFailure::Store(e)),
            }
        };

        RetryIf::spawn(strategy, lookup, |e: &LookupFailure| {
            matches!(e, LookupFailure::Missing)
        })
        .await
        .map_err(|failure| match failure {
            LookupFailure::Missing => AppError::internal(
                "Stored URL could not be read back",
                json!({ "reason": "record missing after insert" }),
            ),
            LookupFailure::Store(e) => e,
        })
    }
}
