//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::CLAIM_ID_FORMAT;
use domain_claims::ClaimError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid claim ID format. Expected {}", CLAIM_ID_FORMAT)]
    InvalidClaimId {
        claim_id: String,
        request_id: Option<String>,
    },

    #[error("Claim not found")]
    ClaimNotFound { claim_id: String },

    #[error("No notes found for claim")]
    NotesNotFound { claim_id: String },

    #[error("Failed to generate summary")]
    SummaryFailed { request_id: Option<String> },
}

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidClaimId { .. } => StatusCode::BAD_REQUEST,
            ApiError::ClaimNotFound { .. } | ApiError::NotesNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            ApiError::SummaryFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();

        let (claim_id, request_id) = match self {
            ApiError::InvalidClaimId { claim_id, request_id } => (Some(claim_id), request_id),
            ApiError::ClaimNotFound { claim_id } | ApiError::NotesNotFound { claim_id } => {
                (Some(claim_id), None)
            }
            ApiError::SummaryFailed { request_id } => (None, request_id),
        };

        let body = ErrorResponse {
            error,
            claim_id,
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::ClaimNotFound(claim_id) => ApiError::ClaimNotFound { claim_id },
            ClaimError::NotesNotFound(claim_id) => ApiError::NotesNotFound { claim_id },
        }
    }
}
