//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types for the hexagonal
//! (ports and adapters) layout used by the service.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Application Layer                        │
//! │          (HTTP handlers / SummaryGenerator service)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Port Traits                             │
//! │                   (CompletionPort, ...)                      │
//! │   Defined in each domain, depend only on core_kernel         │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │ External Adapter  │     │  Test Adapter    │
//!         │  (Azure OpenAI)   │     │ (scripted text)  │
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! Each domain defines its own port trait that extends [`DomainPort`].
//! Adapters implement those traits and report failures as [`PortError`].
//!
//! ```rust,ignore
//! // In domain_claims/src/ports.rs
//! #[async_trait]
//! pub trait CompletionPort: DomainPort {
//!     async fn complete(&self, request: &CompletionRequest) -> Result<Completion, PortError>;
//! }
//!
//! // In infra_external - external API adapter
//! impl CompletionPort for AzureOpenAiAdapter { ... }
//! ```

use thiserror::Error;

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// so callers can classify failures without knowing which adapter produced them.
#[derive(Debug, Error)]
pub enum PortError {
    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// Authentication or authorization failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// Rate limit exceeded for external API
    #[error("Rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        retry_after_secs: u64,
    },

    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// The external system answered with something we could not decode
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Connection error that keeps the underlying cause
    pub fn connection_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PortError::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a Transformation error
    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::RateLimited { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }

    /// Short classification used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            PortError::Connection { .. } => "Connection",
            PortError::Timeout { .. } => "Timeout",
            PortError::Unauthorized { .. } => "Unauthorized",
            PortError::RateLimited { .. } => "RateLimited",
            PortError::ServiceUnavailable { .. } => "ServiceUnavailable",
            PortError::Transformation { .. } => "Transformation",
            PortError::Internal { .. } => "Internal",
        }
    }
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be shared across request handlers.
pub trait DomainPort: Send + Sync + 'static {}
