//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{token}`      - Redirect to the stored URL, or fall through to the front end
//! - `POST /api/short`    - Shorten a URL
//! - `GET  /api/health`   - Health check: store and cache
//! - everything else      - Static front end from `STATIC_DIR`, defaulting to `index.html`
//!   (including non-`GET` requests to a token path)
//!
//! Health lives under `/api` so that no radix-36 token (such as `health`)
//! is shadowed by a fixed route.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::serve_static;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the application router without path normalization.
///
/// Used directly by integration tests; production wraps it with
/// [`app_router`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{token}", get(redirect_handler))
        .method_not_allowed_fallback(serve_static)
        .nest("/api", api::routes::routes())
        .fallback(serve_static)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
