//! Health DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::claims::serialize_timestamp;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
    pub version: &'static str,
    pub dependencies: HealthDependencies,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDependencies {
    pub mock_data: MockDataCounts,
    #[serde(rename = "azureOpenAI")]
    pub azure_openai: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MockDataCounts {
    pub claims: usize,
    pub notes: usize,
}
