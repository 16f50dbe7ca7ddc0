//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use std::collections::HashMap;

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimStore, NoteCollection};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Map, Value};

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    id: String,
    claim_number: Option<String>,
    claim_type: String,
    status: String,
    description: String,
    estimated_amount: Decimal,
    extra: Map<String, Value>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: "CLM001".to_string(),
            claim_number: None,
            claim_type: "theft".to_string(),
            status: "in-review".to_string(),
            description: "Laptop stolen from a parked vehicle".to_string(),
            estimated_amount: dec!(1200),
            extra: Map::new(),
        }
    }

    /// Sets the claim identifier (also used as claim number unless one is set)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_claim_number(mut self, number: impl Into<String>) -> Self {
        self.claim_number = Some(number.into());
        self
    }

    pub fn with_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = claim_type.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.estimated_amount = amount;
        self
    }

    /// Adds a field the service does not interpret
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Builds the claim
    ///
    /// # Panics
    ///
    /// Panics if the identifier is not a valid claim id
    pub fn build(self) -> Claim {
        let id = ClaimId::parse(&self.id).expect("test claim id must be valid");
        Claim {
            claim_number: self.claim_number.unwrap_or_else(|| self.id.clone()),
            id,
            claim_type: self.claim_type,
            status: self.status,
            description: self.description,
            estimated_amount: self.estimated_amount,
            extra: self.extra,
        }
    }
}

/// Builder for an in-memory claim store
#[derive(Default)]
pub struct TestStoreBuilder {
    claims: Vec<Claim>,
    notes: HashMap<String, NoteCollection>,
}

impl TestStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }

    /// Attaches a list of note entries to a claim id
    pub fn with_notes<I, S>(mut self, id: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notes.insert(
            id.into(),
            NoteCollection::Entries(entries.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Attaches a single free-text note to a claim id
    pub fn with_note_text(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.notes.insert(id.into(), NoteCollection::Text(text.into()));
        self
    }

    pub fn build(self) -> ClaimStore {
        ClaimStore::new(self.claims, self.notes)
    }
}
