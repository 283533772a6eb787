//! Static front-end and default page.
//!
//! Requests that match no API route, and tokens that resolve to nothing, are
//! answered from the static directory. Paths with no matching file get
//! `index.html` with `200 OK`, whatever the request method.

use axum::{
    extract::{Request, State},
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use std::path::Path;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Service serving the static directory with `index.html` as the default page.
pub type FallbackService = ServeDir<ServeFile>;

/// Builds the fallback service for `static_dir`.
pub fn static_fallback(static_dir: impl AsRef<Path>) -> FallbackService {
    let dir = static_dir.as_ref();
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// Hands a request to the fallback service.
///
/// Static files are only served for `GET` and `HEAD`; any other method gets
/// the default page.
pub async fn fall_through(fallback: &FallbackService, mut request: Request) -> Response {
    if request.method() != Method::GET && request.method() != Method::HEAD {
        *request.method_mut() = Method::GET;
        *request.uri_mut() = Uri::from_static("/");
    }

    match fallback.clone().oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Router fallback: unmatched paths and unsupported methods.
pub async fn serve_static(State(state): State<AppState>, request: Request) -> Response {
    fall_through(&state.fallback, request).await
}
