//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::cache::CacheService;
use crate::web::FallbackService;

/// Per-process state, cloned into every request.
///
/// Holds no mutable data of its own: the store behind [`UrlService`] and the
/// cache manage their own concurrency.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub cache: Arc<dyn CacheService>,
    pub fallback: FallbackService,
}

impl AppState {
    pub fn new(
        url_service: Arc<UrlService>,
        cache: Arc<dyn CacheService>,
        fallback: FallbackService,
    ) -> Self {
        Self {
            url_service,
            cache,
            fallback,
        }
    }
}
