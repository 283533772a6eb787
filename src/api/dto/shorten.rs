//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// The URL is stored verbatim; only presence and non-emptiness are checked
/// here.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(
        required(message = "url is required"),
        length(min = 1, message = "url must not be empty")
    )]
    pub url: Option<String>,
}

/// Response carrying the full short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortURL")]
    pub short_url: String,
}
