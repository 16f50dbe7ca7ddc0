//! Claim records and case notes

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use core_kernel::ClaimId;

/// A claim as loaded from the claims document
///
/// Fields the service does not interpret are kept in `extra` so the record
/// is returned to callers exactly as it was loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Claim identifier (`CLM###`)
    pub id: ClaimId,
    /// Claim number
    pub claim_number: String,
    /// Type of loss, e.g. `theft`
    #[serde(rename = "type")]
    pub claim_type: String,
    /// Processing status, e.g. `in-review`
    pub status: String,
    /// Free-text description of the loss
    #[serde(default)]
    pub description: String,
    /// Estimated amount of the loss
    #[serde(serialize_with = "serialize_amount")]
    pub estimated_amount: Decimal,
    /// Any other fields present in the source document
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claim {
    /// Estimated amount rendered without trailing zeros (`1200`, `845.5`)
    pub fn estimate_display(&self) -> String {
        self.estimated_amount.normalize().to_string()
    }
}

/// Whole amounts go out as JSON integers, everything else as a float
fn serialize_amount<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        if let Some(whole) = normalized.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    rust_decimal::serde::float::serialize(amount, serializer)
}

/// Case notes attached to a claim
///
/// The notes document stores either one free-text string or an ordered list
/// of chronological entries per claim, optionally wrapped as `{"notes": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "NoteDocument")]
pub enum NoteCollection {
    Text(String),
    Entries(Vec<String>),
}

impl NoteCollection {
    /// Joins the notes into one text blob, entries separated by a single space
    pub fn joined(&self) -> String {
        match self {
            NoteCollection::Text(text) => text.clone(),
            NoteCollection::Entries(entries) => entries.join(" "),
        }
    }

    /// Returns true if there is no note text at all
    pub fn is_empty(&self) -> bool {
        match self {
            NoteCollection::Text(text) => text.is_empty(),
            NoteCollection::Entries(entries) => entries.iter().all(|e| e.is_empty()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NoteBody {
    Text(String),
    Entries(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NoteDocument {
    Bare(NoteBody),
    Wrapped {
        #[serde(default)]
        notes: Option<NoteBody>,
    },
}

impl From<NoteDocument> for NoteCollection {
    fn from(document: NoteDocument) -> Self {
        let body = match document {
            NoteDocument::Bare(body) => Some(body),
            NoteDocument::Wrapped { notes } => notes,
        };
        match body {
            Some(NoteBody::Text(text)) => NoteCollection::Text(text),
            Some(NoteBody::Entries(entries)) => NoteCollection::Entries(entries),
            None => NoteCollection::Text(String::new()),
        }
    }
}
