//! Claims handlers

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;
use tower_http::request_id::RequestId;
use tracing::{error, info};

use core_kernel::ClaimId;
use domain_claims::Claim;

use crate::dto::claims::SummaryResponse;
use crate::middleware::request_id_of;
use crate::{error::ApiError, AppState};

/// Validates the path segment before any store access
fn parse_claim_id(raw: String, request_id: &str) -> Result<ClaimId, ApiError> {
    ClaimId::parse(raw.as_str()).map_err(|_| ApiError::InvalidClaimId {
        claim_id: raw,
        request_id: Some(request_id.to_string()),
    })
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<Json<Claim>, ApiError> {
    let request_id = request_id_of(&request_id);
    let claim_id = parse_claim_id(raw_id, &request_id)?;
    let claim = state.store.require_claim(&claim_id)?;

    info!(
        request_id = %request_id,
        claim_id = %claim_id,
        claim_type = %claim.claim_type,
        "Claim accessed"
    );

    Ok(Json(claim.clone()))
}

/// Generates the summary bundle for a claim and its notes
///
/// Generation runs on its own task; a panic there is reported as a 500
/// carrying the request id.
pub async fn summarize_claim(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let request_id = request_id_of(&request_id);
    let claim_id = parse_claim_id(raw_id, &request_id)?;
    let claim = state.store.require_claim(&claim_id)?.clone();
    let notes = state.store.require_notes(&claim_id)?.joined();
    let claim_type = claim.claim_type.clone();

    let start = Instant::now();
    let generator = Arc::clone(&state.generator);
    let outcome =
        tokio::spawn(async move { generator.generate_summary(&claim, &notes).await }).await;
    let processing_ms = start.elapsed().as_millis() as u64;

    let bundle = match outcome {
        Ok(bundle) => bundle,
        Err(e) => {
            error!(
                request_id = %request_id,
                claim_id = %claim_id,
                error_type = if e.is_panic() { "panic" } else { "cancelled" },
                error = %e,
                "AI service error"
            );
            return Err(ApiError::SummaryFailed {
                request_id: Some(request_id),
            });
        }
    };

    info!(
        request_id = %request_id,
        claim_id = %claim_id,
        claim_type = %claim_type,
        processing_ms,
        tokens_used = bundle.usage_tokens,
        "AI summary generated"
    );

    Ok(Json(SummaryResponse::new(claim_id, bundle, Utc::now())))
}
