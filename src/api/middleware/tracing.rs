//! HTTP request/response tracing middleware.

use axum::{body::Body, http::Request};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Span factory recording method and path only.
///
/// Query strings are left out so submitted data never ends up in logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathSpan;

impl MakeSpan<Body> for PathSpan {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span with method and path; the response is
/// logged with status and latency in milliseconds, and 5xx responses are
/// additionally logged at `ERROR`.
///
/// ```text
/// INFO request{method=POST path=/api/short}: finished processing request latency=3 ms status=201
/// INFO request{method=GET path=/1}: finished processing request latency=1 ms status=302
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    PathSpan,
    tower_http::trace::DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(PathSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
