//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claims, notes, documents, and completion texts.
//! These fixtures are consistent and predictable for unit and router tests.

use domain_claims::{Claim, ClaimStore};
use rust_decimal_macros::dec;
use serde_json::json;

use crate::builders::{TestClaimBuilder, TestStoreBuilder};

/// Fixture claims
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Theft claim under review, estimate 1200 (has list notes)
    pub fn theft() -> Claim {
        TestClaimBuilder::new()
            .with_id("CLM001")
            .with_type("theft")
            .with_status("in-review")
            .with_description("Laptop and camera stolen from a parked vehicle")
            .with_amount(dec!(1200))
            .with_extra("policyNumber", json!("POL-100234"))
            .build()
    }

    /// Auto collision claim, approved, fractional estimate (has text notes)
    pub fn auto_collision() -> Claim {
        TestClaimBuilder::new()
            .with_id("CLM002")
            .with_type("auto")
            .with_status("approved")
            .with_description("Rear-end collision at a traffic light")
            .with_amount(dec!(8450.75))
            .build()
    }

    /// Water damage claim with no notes on file
    pub fn water_damage() -> Claim {
        TestClaimBuilder::new()
            .with_id("CLM003")
            .with_type("property")
            .with_status("submitted")
            .with_description("Burst pipe flooded the basement")
            .with_amount(dec!(15000))
            .build()
    }
}

/// Fixture notes and stores
pub struct StoreFixtures;

impl StoreFixtures {
    pub fn theft_notes() -> Vec<&'static str> {
        vec![
            "Customer reported theft on Monday.",
            "Police report number 55-1023 received.",
            "Awaiting receipts for the stolen camera.",
        ]
    }

    pub fn collision_notes() -> &'static str {
        "Repair shop estimate received and approved by adjuster."
    }

    /// Store with CLM001 (list notes), CLM002 (text notes) and CLM003 (no notes)
    pub fn sample() -> ClaimStore {
        TestStoreBuilder::new()
            .with_claim(ClaimFixtures::theft())
            .with_claim(ClaimFixtures::auto_collision())
            .with_claim(ClaimFixtures::water_damage())
            .with_notes("CLM001", Self::theft_notes())
            .with_note_text("CLM002", Self::collision_notes())
            .build()
    }
}

/// Raw startup documents, in the on-disk layout
pub struct DocumentFixtures;

impl DocumentFixtures {
    pub fn claims_json() -> String {
        json!([
            {
                "id": "CLM001",
                "claimNumber": "CLM001",
                "type": "theft",
                "status": "in-review",
                "description": "Laptop and camera stolen from a parked vehicle",
                "estimatedAmount": 1200,
                "policyNumber": "POL-100234"
            },
            {
                "id": "CLM002",
                "claimNumber": "CLM002",
                "type": "auto",
                "status": "approved",
                "description": "Rear-end collision at a traffic light",
                "estimatedAmount": 8450.75
            }
        ])
        .to_string()
    }

    pub fn notes_json() -> String {
        json!({
            "CLM001": { "notes": ["Customer reported theft on Monday.", "Police report received."] },
            "CLM002": { "notes": "Repair shop estimate received." }
        })
        .to_string()
    }
}

/// Completion texts as a remote model might return them
pub struct CompletionFixtures;

impl CompletionFixtures {
    /// Well-formed JSON wrapped in prose and a code fence
    pub fn fenced_json() -> String {
        format!(
            "Sure, here is the summary:\n```json\n{}\n```",
            json!({
                "summary": "Theft claim for a laptop and camera is under review.",
                "customerSummary": "We are reviewing your theft claim and will update you soon.",
                "adjusterSummary": "Verify police report 55-1023 and receipts before approval.",
                "nextStep": "Request receipts from the customer."
            })
        )
    }

    /// Prose with four usable sentences
    pub fn prose() -> &'static str {
        "Claim looks routine. Customer should expect payout soon. Adjuster: verify VIN. Next: close within 5 days."
    }

    /// JSON object with nested structures where strings were requested
    pub fn nested_json() -> &'static str {
        r#"{"summary": {"text": "Nested"}, "customerSummary": "Fine", "adjusterSummary": "A", "nextStep": "B"}"#
    }

    /// JSON object carrying only the summary key
    pub fn summary_only_json() -> &'static str {
        r#"{"summary": "Only the summary was produced for this claim."}"#
    }
}
