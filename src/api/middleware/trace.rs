//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the per-request tracing layer.
///
/// Opens an `INFO` span carrying method, URI and HTTP version, logs the
/// request start at `DEBUG` and the response status and latency at `INFO`.
///
/// ```text
/// INFO request{method=POST uri=/query/shorten?api=true version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// INFO request{method=GET uri=/Xb3k9QmZ_a1c version=HTTP/1.1}: finished processing request latency=1 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
