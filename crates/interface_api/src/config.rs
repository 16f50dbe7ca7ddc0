//! API configuration
//!
//! Values come from `API_*` environment variables (e.g. `API_PORT`,
//! `API_CLAIMS_PATH`). The deployment-level variables `PORT`,
//! `AZURE_OPENAI_ENDPOINT`, `AZURE_OPENAI_API_KEY` and
//! `AZURE_OPENAI_DEPLOYMENT_NAME` are honoured as well and take precedence.

use std::time::Duration;

use infra_external::{AzureOpenAiSettings, RetryPolicy};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Path to the claims document
    pub claims_path: String,
    /// Path to the notes document
    pub notes_path: String,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// `pretty` or `json`
    pub log_format: String,
    pub azure_openai_endpoint: Option<String>,
    pub azure_openai_api_key: Option<SecretString>,
    pub azure_openai_deployment: String,
    pub azure_openai_api_version: String,
    /// Per-attempt timeout for completion requests
    pub completion_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            claims_path: "mocks/claims.json".to_string(),
            notes_path: "mocks/notes.json".to_string(),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            azure_openai_endpoint: None,
            azure_openai_api_key: None,
            azure_openai_deployment: "gpt-35-turbo".to_string(),
            azure_openai_api_version: "2024-02-15-preview".to_string(),
            completion_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::Environment::with_prefix("API"));

        for (key, var) in [
            ("port", "PORT"),
            ("azure_openai_endpoint", "AZURE_OPENAI_ENDPOINT"),
            ("azure_openai_api_key", "AZURE_OPENAI_API_KEY"),
            ("azure_openai_deployment", "AZURE_OPENAI_DEPLOYMENT_NAME"),
        ] {
            builder = builder.set_override_option(key, std::env::var(var).ok())?;
        }

        builder.build()?.try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns true if JSON log output was requested
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    /// Completion adapter settings, or `None` to run with templated summaries
    ///
    /// Both the endpoint and the key must be present and non-blank.
    pub fn completion_settings(&self) -> Option<AzureOpenAiSettings> {
        let endpoint = self
            .azure_openai_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())?;
        let api_key = self
            .azure_openai_api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())?;

        Some(AzureOpenAiSettings {
            deployment: self.azure_openai_deployment.clone(),
            api_version: self.azure_openai_api_version.clone(),
            timeout: Duration::from_secs(self.completion_timeout_secs),
            retry: RetryPolicy::default(),
            ..AzureOpenAiSettings::new(endpoint, api_key.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_credentials(endpoint: &str, key: &str) -> ApiConfig {
        ApiConfig {
            azure_openai_endpoint: Some(endpoint.to_string()),
            azure_openai_api_key: Some(SecretString::new(key.to_string())),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.azure_openai_deployment, "gpt-35-turbo");
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert!(!config.json_logs());
    }

    #[test]
    fn test_missing_credentials_select_mock_mode() {
        assert!(ApiConfig::default().completion_settings().is_none());

        let endpoint_only = ApiConfig {
            azure_openai_endpoint: Some("https://example.openai.azure.com".into()),
            ..ApiConfig::default()
        };
        assert!(endpoint_only.completion_settings().is_none());

        assert!(with_credentials("  ", "key").completion_settings().is_none());
        assert!(with_credentials("https://example.openai.azure.com", "").completion_settings().is_none());
    }

    #[test]
    fn test_completion_settings_carry_config() {
        let config = ApiConfig {
            azure_openai_deployment: "claims-gpt".into(),
            completion_timeout_secs: 12,
            ..with_credentials("https://example.openai.azure.com", "secret")
        };

        let settings = config.completion_settings().unwrap();

        assert_eq!(settings.endpoint, "https://example.openai.azure.com");
        assert_eq!(settings.deployment, "claims-gpt");
        assert_eq!(settings.timeout, Duration::from_secs(12));
        assert_eq!(settings.api_key.expose_secret(), "secret");
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let config = with_credentials("https://example.openai.azure.com", "super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
