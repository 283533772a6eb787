//! Handler for short URL redirect.

use axum::{
    extract::{Path, Request, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};

use crate::application::services::UrlService;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::fall_through;

/// Redirects a token to its stored URL.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// # Request Flow
///
/// 1. Decode the radix-36 token into a record id
/// 2. Check the cache for the id
/// 3. On cache miss, query the store and populate the cache in the background
/// 4. Return `302 Found` with `Location` set to the stored URL
///
/// # Fall-through
///
/// A token that does not decode (including path segments that are not valid
/// UTF-8), or decodes to an id that was never issued, is handed to the static
/// fallback: a matching static file if one exists,
/// otherwise the front-end `index.html`. Unknown tokens are never an error.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the store fails.
pub async fn redirect_handler(
    token: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let Ok(Path(token)) = token else {
        return Ok(fall_through(&state.fallback, request).await);
    };

    let Some(id) = UrlService::parse_token(&token) else {
        return Ok(fall_through(&state.fallback, request).await);
    };

    let target = match state.cache.get_url(id).await {
        Ok(Some(cached)) => Some(cached),
        Ok(None) => lookup_and_cache(&state, id).await?,
        Err(e) => {
            warn!("Cache error: {}", e);
            state.url_service.find_by_id(id).await?.map(|r| r.url)
        }
    };

    match target {
        Some(url) => found(&url),
        None => {
            debug!(token = %token, "Unknown token, falling through");
            Ok(fall_through(&state.fallback, request).await)
        }
    }
}

async fn lookup_and_cache(state: &AppState, id: i64) -> Result<Option<String>, AppError> {
    let Some(record) = state.url_service.find_by_id(id).await? else {
        return Ok(None);
    };

    let cache = state.cache.clone();
    let url = record.url.clone();
    tokio::spawn(async move {
        if let Err(e) = cache.set_url(id, &url, None).await {
            warn!("Failed to cache URL: {}", e);
        }
    });

    Ok(Some(record.url))
}

fn found(url: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(url).map_err(|_| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "reason": "invalid header characters" }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
