//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// - one `INFO` span per request carrying method, URI and HTTP version
/// - request start at `DEBUG`
/// - response status and latency (ms) at `INFO`
/// - 5xx responses additionally reported at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/users/distance version=HTTP/1.1}: finished processing request latency=84 ms status=200
/// ERROR request{method=GET uri=/users version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=3 ms
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
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
