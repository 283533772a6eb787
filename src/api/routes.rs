//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /short`  - Create or reuse a short URL
/// - `GET  /health` - Store and cache health report
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/short", post(shorten_handler))
        .route("/health", get(health_handler))
}
