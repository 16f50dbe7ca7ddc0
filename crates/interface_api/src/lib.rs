//! HTTP API Layer
//!
//! This crate provides the REST API for the claim status service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: health, claim lookup, and claim summarization
//! - **Middleware**: request ids, tracing, request logging, security headers
//! - **DTOs**: Response data transfer objects
//! - **Error Handling**: Consistent JSON error bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(store, generator));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderName, Request},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::{ClaimStore, SummaryGenerator};

use crate::handlers::{claims, health};
use crate::middleware::{
    request_logging_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};

/// Largest accepted request body; a larger declared `content-length` is a 413
pub const BODY_LIMIT_BYTES: usize = 256 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ClaimStore>,
    pub generator: Arc<SummaryGenerator>,
}

impl AppState {
    pub fn new(store: ClaimStore, generator: SummaryGenerator) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
        }
    }
}

/// Creates the main API router
///
/// Every response carries an `x-request-id` header; an incoming one is kept,
/// otherwise a UUID v4 is assigned before any other layer runs.
pub fn create_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let request_tracing = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id_header.clone(), MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default();
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/claims/:id", get(claims::get_claim))
        .route("/claims/:id/summarize", post(claims::summarize_claim))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(axum_middleware::from_fn(security_headers_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(request_tracing)
        .with_state(state)
}
