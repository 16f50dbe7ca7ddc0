//! API middleware

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tower_http::request_id::RequestId;
use tracing::info;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Reads the correlation id assigned by `SetRequestIdLayer`
pub fn request_id_of(request_id: &RequestId) -> String {
    request_id
        .header_value()
        .to_str()
        .unwrap_or_default()
        .to_string()
}

/// Request logging middleware
///
/// Logs one line per completed request with its correlation id
pub async fn request_logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(request_id_of)
        .unwrap_or_default();

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "Request completed"
    );

    response
}

/// Security headers middleware
///
/// Adds the fixed browser-hardening headers to every response
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(header::X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));

    response
}
