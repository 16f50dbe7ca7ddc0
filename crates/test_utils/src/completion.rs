//! Completion Port Test Doubles
//!
//! Scripted, failing, and panicking implementations of `CompletionPort`
//! so the summary generator and the HTTP layer can be exercised without a
//! remote model.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError};
use domain_claims::{Completion, CompletionPort, CompletionRequest};

/// Returns the same text for every request and records what was asked
#[derive(Debug, Default)]
pub struct ScriptedCompletion {
    text: String,
    total_tokens: Option<u32>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletion {
    pub fn new(text: impl Into<String>, total_tokens: Option<u32>) -> Self {
        Self {
            text: text.into(),
            total_tokens,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Wraps the port in an `Arc` ready for `SummaryGenerator::new`
    pub fn shared(text: impl Into<String>, total_tokens: Option<u32>) -> Arc<Self> {
        Arc::new(Self::new(text, total_tokens))
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests().pop()
    }
}

impl DomainPort for ScriptedCompletion {}

#[async_trait]
impl CompletionPort for ScriptedCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, PortError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        Ok(Completion::new(self.text.clone(), self.total_tokens))
    }
}

/// Fails every request with an error built by the supplied factory
pub struct FailingCompletion {
    make_error: Box<dyn Fn() -> PortError + Send + Sync>,
}

impl FailingCompletion {
    pub fn new(make_error: impl Fn() -> PortError + Send + Sync + 'static) -> Self {
        Self {
            make_error: Box::new(make_error),
        }
    }

    /// Simulates an unreachable endpoint
    pub fn network() -> Arc<Self> {
        Arc::new(Self::new(|| PortError::connection("connection refused")))
    }

    /// Simulates a rejected credential
    pub fn unauthorized() -> Arc<Self> {
        Arc::new(Self::new(|| PortError::Unauthorized {
            message: "invalid api key".to_string(),
        }))
    }
}

impl DomainPort for FailingCompletion {}

#[async_trait]
impl CompletionPort for FailingCompletion {
    async fn complete(&self, _request: &CompletionRequest) -> Result<Completion, PortError> {
        Err((self.make_error)())
    }
}

/// Panics on every request, standing in for an adapter bug
#[derive(Debug, Default)]
pub struct PanickingCompletion;

impl DomainPort for PanickingCompletion {}

#[async_trait]
impl CompletionPort for PanickingCompletion {
    async fn complete(&self, _request: &CompletionRequest) -> Result<Completion, PortError> {
        panic!("completion adapter bug")
    }
}
