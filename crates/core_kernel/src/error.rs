//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid identifier '{value}': expected {expected}")]
    InvalidIdentifier {
        value: String,
        expected: &'static str,
    },
}

impl CoreError {
    pub fn invalid_identifier(value: impl Into<String>, expected: &'static str) -> Self {
        CoreError::InvalidIdentifier {
            value: value.into(),
            expected,
        }
    }
}
