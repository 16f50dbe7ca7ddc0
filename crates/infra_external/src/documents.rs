//! Startup document loading
//!
//! Claims live in a JSON array; notes live in a JSON object keyed by claim
//! id whose values are either the notes themselves or `{"notes": ...}`.
//! Both files are read once and any failure is fatal to the caller. Entries
//! that can never be looked up (a claim whose id is not `CLM###`, a `null`
//! notes value) are skipped with a warning.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimStore, NoteCollection};

use crate::error::DocumentError;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the claims array
///
/// Records whose `id` is a string but not a well-formed claim identifier are
/// skipped. Any other shape mismatch is a parse error for the whole document.
pub fn load_claims(path: impl AsRef<Path>) -> Result<Vec<Claim>, DocumentError> {
    let path = path.as_ref();
    let records: Vec<Value> = read_json(path)?;

    let mut claims = Vec::with_capacity(records.len());
    for record in records {
        if let Some(id) = record.get("id").and_then(Value::as_str) {
            if !ClaimId::is_valid(id) {
                warn!(claim_id = id, path = %path.display(), "Skipping claim with malformed id");
                continue;
            }
        }
        let claim = serde_json::from_value(record).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        claims.push(claim);
    }
    Ok(claims)
}

/// Reads the notes map, dropping `null` entries
pub fn load_notes(
    path: impl AsRef<Path>,
) -> Result<HashMap<String, NoteCollection>, DocumentError> {
    let path = path.as_ref();
    let entries: HashMap<String, Option<NoteCollection>> = read_json(path)?;

    Ok(entries
        .into_iter()
        .filter_map(|(claim_id, notes)| match notes {
            Some(notes) => Some((claim_id, notes)),
            None => {
                warn!(claim_id = %claim_id, path = %path.display(), "Skipping null notes entry");
                None
            }
        })
        .collect())
}

/// Loads both documents into a [`ClaimStore`]
pub fn load_all(
    claims_path: impl AsRef<Path>,
    notes_path: impl AsRef<Path>,
) -> Result<ClaimStore, DocumentError> {
    let claims = load_claims(claims_path.as_ref())?;
    let notes = load_notes(notes_path.as_ref())?;

    info!(
        claims = claims.len(),
        notes = notes.len(),
        claims_path = %claims_path.as_ref().display(),
        notes_path = %notes_path.as_ref().display(),
        "Loaded claim documents"
    );

    Ok(ClaimStore::new(claims, notes))
}
