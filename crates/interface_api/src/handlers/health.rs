//! Health check handlers

use axum::{extract::State, Json};
use chrono::Utc;

use crate::dto::health::{HealthDependencies, HealthResponse, MockDataCounts};
use crate::AppState;

pub const SERVICE_NAME: &str = "claim-status-api";

/// Health check endpoint
///
/// Reports loaded document counts and whether summaries come from the
/// completion service (`connected`) or from templates (`mock_mode`).
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        dependencies: HealthDependencies {
            mock_data: MockDataCounts {
                claims: state.store.claim_count(),
                notes: state.store.notes_count(),
            },
            azure_openai: if state.generator.is_configured() {
                "connected"
            } else {
                "mock_mode"
            },
        },
    })
}
