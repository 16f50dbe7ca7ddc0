//! Claim summary generation
//!
//! [`SummaryGenerator::generate_summary`] never fails: every path ends in a
//! [`SummaryBundle`] whose four narrative fields are non-empty.
//!
//! | completion port | outcome                    | bundle                          |
//! |-----------------|----------------------------|---------------------------------|
//! | not configured  | -                          | templated from claim fields     |
//! | configured      | JSON object with strings   | fields from the object          |
//! | configured      | prose / malformed JSON     | fields from the first sentences |
//! | configured      | `PortError`                | fixed "try again later" bundle  |

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, instrument};

use crate::claim::Claim;
use crate::parsing::{parse_summary_fields, SummaryFields};
use crate::ports::{CompletionPort, CompletionRequest};
use crate::prompt::{build_user_prompt, truncate_notes, SYSTEM_INSTRUCTION};

/// Four narrative summaries of a claim plus the tokens spent producing them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryBundle {
    pub summary: String,
    pub customer_summary: String,
    pub adjuster_summary: String,
    pub next_step: String,
    pub usage_tokens: u32,
}

impl SummaryBundle {
    /// Bundle built from the claim alone, used when no completion service is configured
    pub fn templated(claim: &Claim, notes: &str) -> Self {
        let amount = claim.estimate_display();
        Self {
            summary: format!(
                "Claim {} ({}) is {} with estimate ${}.",
                claim.claim_number, claim.claim_type, claim.status, amount
            ),
            customer_summary: format!(
                "Your claim {} is currently {}. We are reviewing the provided information.",
                claim.claim_number, claim.status
            ),
            adjuster_summary: format!(
                "Claim {} ({}): type={}; status={}; est=${}; notesChars={}.",
                claim.id,
                claim.claim_number,
                claim.claim_type,
                claim.status,
                amount,
                notes.chars().count()
            ),
            next_step: "Review documentation and proceed to next workflow step".to_string(),
            usage_tokens: 0,
        }
    }

    /// Bundle returned when the completion service call itself failed
    pub fn service_failure() -> Self {
        Self {
            summary: "Error generating AI summary. Please try again later.".to_string(),
            customer_summary: "We are still processing your claim. Please check back later."
                .to_string(),
            adjuster_summary: "AI generation failed; manual review required.".to_string(),
            next_step: "Retry AI generation later".to_string(),
            usage_tokens: 0,
        }
    }

    /// Fills absent or blank fields, falling back to the summary where it makes sense
    pub fn from_fields(fields: SummaryFields, usage_tokens: u32) -> Self {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let summary = present(fields.summary);
        Self {
            customer_summary: present(fields.customer_summary)
                .or_else(|| summary.clone())
                .unwrap_or_else(|| "Customer summary unavailable".to_string()),
            adjuster_summary: present(fields.adjuster_summary)
                .or_else(|| summary.clone())
                .unwrap_or_else(|| "Adjuster summary unavailable".to_string()),
            next_step: present(fields.next_step)
                .unwrap_or_else(|| "No next step identified".to_string()),
            summary: summary.unwrap_or_else(|| "Summary unavailable".to_string()),
            usage_tokens,
        }
    }
}

/// Sampling options for summary requests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.3,
        }
    }
}

/// Produces [`SummaryBundle`]s, optionally backed by a completion service
///
/// The completion port is handed in at construction and shared by every
/// call; the generator itself holds no per-request state.
#[derive(Clone)]
pub struct SummaryGenerator {
    completion: Option<Arc<dyn CompletionPort>>,
    options: GenerationOptions,
}

impl SummaryGenerator {
    /// Creates a generator that calls the given completion service
    pub fn new(completion: Arc<dyn CompletionPort>) -> Self {
        Self {
            completion: Some(completion),
            options: GenerationOptions::default(),
        }
    }

    /// Creates a generator that only produces templated bundles
    pub fn unconfigured() -> Self {
        Self {
            completion: None,
            options: GenerationOptions::default(),
        }
    }

    /// Overrides the sampling options
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns true if a completion service is configured
    pub fn is_configured(&self) -> bool {
        self.completion.is_some()
    }

    /// Builds the completion request for a claim; `notes` must already be truncated
    pub fn build_request(&self, claim: &Claim, notes: &str) -> CompletionRequest {
        CompletionRequest {
            system: SYSTEM_INSTRUCTION.to_string(),
            user: build_user_prompt(claim, notes),
            max_tokens: self.options.max_tokens,
            temperature: self.options.temperature,
        }
    }

    /// Summarizes a claim and its notes
    #[instrument(skip_all, fields(claim_id = %claim.id))]
    pub async fn generate_summary(&self, claim: &Claim, notes_text: &str) -> SummaryBundle {
        let notes = truncate_notes(notes_text);

        let Some(completion) = &self.completion else {
            debug!("No completion service configured, using templated summary");
            return SummaryBundle::templated(claim, notes);
        };

        let request = self.build_request(claim, notes);
        match completion.complete(&request).await {
            Ok(response) => {
                let fields = parse_summary_fields(response.text.trim());
                SummaryBundle::from_fields(fields, response.total_tokens.unwrap_or(0))
            }
            Err(e) => {
                error!(error_type = e.kind(), error = %e, "AI service error");
                SummaryBundle::service_failure()
            }
        }
    }
}

impl std::fmt::Debug for SummaryGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryGenerator")
            .field("configured", &self.is_configured())
            .field("options", &self.options)
            .finish()
    }
}
