//! Request middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, info_span, warn, Instrument};

/// Log each request with its outcome and duration.
///
/// Runs the request inside a span keyed by its path, so lookup logs for
/// `/recharge.json` carry the invocation that triggered them.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let invocation = request.uri().path().trim_start_matches('/').to_owned();
    let span = info_span!("request", %method, invocation = %invocation);

    async move {
        let start = Instant::now();
        debug!("Request started");

        let response = next.run(request).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        match status.as_u16() {
            200..=399 => debug!(%status, elapsed_ms, "Request completed"),
            400..=499 => warn!(%status, elapsed_ms, "Request rejected"),
            _ => warn!(%status, elapsed_ms, "Request failed"),
        }

        response
    }
    .instrument(span)
    .await
}
