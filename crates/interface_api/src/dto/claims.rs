//! Claims DTOs

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use domain_claims::SummaryBundle;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub claim_id: String,
    pub summary: String,
    pub customer_summary: String,
    pub adjuster_summary: String,
    pub next_step: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub generated_at: DateTime<Utc>,
}

impl SummaryResponse {
    pub fn new(claim_id: impl Into<String>, bundle: SummaryBundle, generated_at: DateTime<Utc>) -> Self {
        Self {
            claim_id: claim_id.into(),
            summary: bundle.summary,
            customer_summary: bundle.customer_summary,
            adjuster_summary: bundle.adjuster_summary,
            next_step: bundle.next_step,
            generated_at,
        }
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix
pub(crate) fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
