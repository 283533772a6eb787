//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) the short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/short`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortURL": "https://s.example.com/1" }
/// ```
///
/// Submitting a URL that is already stored returns the same short URL.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or a missing/empty `url`.
/// Returns 500 Internal Server Error if the store fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let url = payload.url.unwrap_or_default();
    let shortened = state.url_service.shorten(&url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: shortened.short_url,
        }),
    ))
}
