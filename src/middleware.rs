//! Access-log middleware.
//!
//! Wraps every request in a `request` span tagged with a fresh UUID v4 and emits
//! one `Request completed` line per response with its status, body length and
//! latency.

use std::time::Instant;

use axum::{
    body::HttpBody,
    extract::Request,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Body length of `response` when it is known before streaming.
///
/// Both fixed handlers return full bodies, so this is always `Some` for them.
fn content_length(response: &Response) -> Option<u64> {
    response.body().size_hint().exact()
}

/// Middleware that logs each request inside its own span.
///
/// This should be the outermost layer so the span wraps the handler spans too.
pub async fn access_log_layer(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
        status = tracing::field::Empty,
        content_length = tracing::field::Empty,
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        let status = response.status().as_u16();
        let content_length = content_length(&response);

        let span = tracing::Span::current();
        span.record("status", status);
        if let Some(len) = content_length {
            span.record("content_length", len);
        }

        tracing::info!(
            status,
            content_length,
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
