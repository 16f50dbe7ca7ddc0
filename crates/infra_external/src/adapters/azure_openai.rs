//! Azure OpenAI Adapter
//!
//! Implements `CompletionPort` against the Azure OpenAI chat-completions
//! endpoint of a single deployment.
//!
//! # Error Handling
//!
//! Remote failures are mapped to `PortError` variants:
//! - 401/403 -> `PortError::Unauthorized`
//! - 429 -> `PortError::RateLimited` (from `retry-after`, default 1 s)
//! - 5xx -> `PortError::ServiceUnavailable`
//! - other non-success -> `PortError::Internal`
//! - client timeout -> `PortError::Timeout`
//! - connect / transport failure -> `PortError::Connection`
//! - undecodable response -> `PortError::Transformation`
//!
//! Transient errors are retried once according to the adapter's
//! [`RetryPolicy`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use core_kernel::{DomainPort, PortError};
use domain_claims::{Completion, CompletionPort, CompletionRequest};

use crate::retry::RetryPolicy;

const SERVICE_NAME: &str = "azure-openai";

/// Connection settings for one Azure OpenAI deployment
#[derive(Debug, Clone)]
pub struct AzureOpenAiSettings {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    pub api_key: SecretString,
    pub deployment: String,
    pub api_version: String,
    /// Client-side limit for each HTTP attempt
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl AzureOpenAiSettings {
    pub fn new(endpoint: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            deployment: "gpt-35-turbo".to_string(),
            api_version: "2024-02-15-preview".to_string(),
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }

    /// Full chat-completions URL for the configured deployment
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ChatRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            messages: [
                ChatMessage { role: "system", content: &request.system },
                ChatMessage { role: "user", content: &request.user },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    total_tokens: Option<u32>,
}

impl From<ChatResponse> for Completion {
    fn from(response: ChatResponse) -> Self {
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();
        Completion::new(text, response.usage.and_then(|usage| usage.total_tokens))
    }
}

/// Chat-completions client for one Azure OpenAI deployment
///
/// Built once at startup and shared by every summarize request.
#[derive(Debug)]
pub struct AzureOpenAiAdapter {
    settings: AzureOpenAiSettings,
    url: String,
    client: Client,
}

impl AzureOpenAiAdapter {
    /// Creates an adapter with its own HTTP client
    pub fn new(settings: AzureOpenAiSettings) -> Result<Self, PortError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| PortError::connection_with_source("Failed to build HTTP client", e))?;
        let url = settings.chat_completions_url();

        Ok(Self { settings, url, client })
    }

    pub fn deployment(&self) -> &str {
        &self.settings.deployment
    }

    async fn send_once(&self, request: &CompletionRequest) -> Result<Completion, PortError> {
        let response = self
            .client
            .post(&self.url)
            .header("api-key", self.settings.api_key.expose_secret().as_str())
            .json(&ChatRequest::from(request))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let response = check_status(response).await?;

        let body: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.timeout_error()
            } else {
                PortError::transformation(format!("Invalid chat completion response: {}", e))
            }
        })?;

        Ok(body.into())
    }

    fn map_transport_error(&self, error: reqwest::Error) -> PortError {
        if error.is_timeout() {
            self.timeout_error()
        } else {
            PortError::connection_with_source(
                format!("Request to {} failed", SERVICE_NAME),
                error,
            )
        }
    }

    fn timeout_error(&self) -> PortError {
        PortError::Timeout {
            operation: "chat_completions".to_string(),
            duration_ms: self.settings.timeout.as_millis() as u64,
        }
    }
}

/// Passes successful responses through and maps the rest to `PortError`
async fn check_status(response: Response) -> Result<Response, PortError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after_secs = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(1);
    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), body = %body, "Chat completion rejected");

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PortError::Unauthorized {
            message: format!("{} rejected credentials ({})", SERVICE_NAME, status),
        },
        StatusCode::TOO_MANY_REQUESTS => PortError::RateLimited { retry_after_secs },
        s if s.is_server_error() => PortError::ServiceUnavailable {
            service: format!("{} ({})", SERVICE_NAME, s),
        },
        s => PortError::internal(format!("{} returned {}", SERVICE_NAME, s)),
    })
}

impl DomainPort for AzureOpenAiAdapter {}

#[async_trait]
impl CompletionPort for AzureOpenAiAdapter {
    #[instrument(skip_all, fields(deployment = %self.settings.deployment))]
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, PortError> {
        let completion = self
            .settings
            .retry
            .run("chat_completions", move || self.send_once(request))
            .await?;
        debug!(
            chars = completion.text.len(),
            total_tokens = ?completion.total_tokens,
            "Chat completion received"
        );
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AzureOpenAiSettings {
        AzureOpenAiSettings::new(
            "https://example.openai.azure.com/",
            SecretString::new("key".to_string()),
        )
    }

    #[test]
    fn test_url_uses_deployment_and_version() {
        assert_eq!(
            settings().chat_completions_url(),
            "https://example.openai.azure.com/openai/deployments/gpt-35-turbo/chat/completions?api-version=2024-02-15-preview"
        );
    }

    #[test]
    fn test_settings_debug_hides_key() {
        let debug = format!("{:?}", settings());
        assert!(!debug.contains("\"key\""));
    }

    #[test]
    fn test_request_body_shape() {
        let request = CompletionRequest {
            system: "sys".into(),
            user: "usr".into(),
            max_tokens: 500,
            temperature: 0.3,
        };
        let body = serde_json::to_value(ChatRequest::from(&request)).unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "usr");
        assert_eq!(body["max_tokens"], 500);
    }

    #[test]
    fn test_response_without_choices_is_empty_text() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let completion = Completion::from(response);
        assert_eq!(completion.text, "");
        assert_eq!(completion.total_tokens, None);
    }

    #[test]
    fn test_response_content_is_trimmed() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "  hi  "}}], "usage": {"total_tokens": 9}}"#,
        )
        .unwrap();
        let completion = Completion::from(response);
        assert_eq!(completion.text, "hi");
        assert_eq!(completion.total_tokens, Some(9));
    }
}
