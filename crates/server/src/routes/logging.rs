//! Per-request access log, one line per request.
//!
//! POST bodies are buffered and included in the line, then handed on to the
//! handler unchanged.

use std::time::Instant;

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header::CONTENT_LENGTH, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use common::observability::observe_request;
use tracing::info;

/// Matches axum's default `Json` body limit.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub async fn access_log(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let (req, logged_body) = if method == Method::POST {
        let (parts, body) = req.into_parts();
        let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
            Ok(b) => b,
            Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
        };
        let text = String::from_utf8_lossy(&bytes).into_owned();
        (Request::from_parts(parts, Body::from(bytes)), Some(text))
    } else {
        (req, None)
    };

    let res = next.run(req).await;

    let status = res.status().as_u16();
    let content_length = res
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let elapsed = start.elapsed();
    observe_request(method.as_str(), status, elapsed.as_secs_f64());

    let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
    match logged_body {
        Some(body) => info!(%method, %uri, status, %content_length, elapsed_ms, %body, "request"),
        None => info!(%method, %uri, status, %content_length, elapsed_ms, "request"),
    }
    res
}
