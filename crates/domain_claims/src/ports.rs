//! Claims Domain Ports
//!
//! The summary generator needs one thing from the outside world: a text
//! completion service. `CompletionPort` describes it so that the generator
//! can run against:
//!
//! - **External API Adapter**: Azure OpenAI chat completions (infra_external)
//! - **Mock Adapter**: scripted responses for tests (test_utils)
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_claims::{SummaryGenerator, CompletionPort};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn CompletionPort> = Arc::new(AzureOpenAiAdapter::new(settings)?);
//! let generator = SummaryGenerator::new(port);
//! let bundle = generator.generate_summary(&claim, &notes).await;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

/// A single prompt sent to the completion service
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction framing the assistant's role
    pub system: String,
    /// User prompt carrying the claim details
    pub user: String,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// Text returned by the completion service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Raw generated text
    pub text: String,
    /// Total tokens reported by the service, if any
    pub total_tokens: Option<u32>,
}

impl Completion {
    pub fn new(text: impl Into<String>, total_tokens: Option<u32>) -> Self {
        Self {
            text: text.into(),
            total_tokens,
        }
    }
}

/// Remote text completion, prompt in and text out
///
/// Implementations are stateless from the caller's point of view: no session
/// or conversation memory is kept between calls.
#[async_trait]
pub trait CompletionPort: DomainPort {
    /// Sends one prompt and returns the generated text
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, PortError>;
}
