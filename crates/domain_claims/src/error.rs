//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("No notes found for claim: {0}")]
    NotesNotFound(String),
}

/// Reasons a completion could not be read as a structured summary
#[derive(Debug, Error)]
pub enum SummaryParseError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON object")]
    NotAnObject,

    #[error("AI returned structured data instead of strings in '{0}'")]
    NestedField(&'static str),
}
