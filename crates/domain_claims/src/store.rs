//! Read-only claim store
//!
//! The store is populated once at startup from the claims and notes
//! documents and never mutated afterwards, so it can be shared behind an
//! `Arc` by every request handler without locking.

use std::collections::HashMap;

use core_kernel::ClaimId;

use crate::claim::{Claim, NoteCollection};
use crate::error::ClaimError;

/// In-memory claims and case notes
#[derive(Debug, Clone, Default)]
pub struct ClaimStore {
    claims: Vec<Claim>,
    notes: HashMap<String, NoteCollection>,
}

impl ClaimStore {
    /// Creates a store from already-loaded claims and notes
    pub fn new(claims: Vec<Claim>, notes: HashMap<String, NoteCollection>) -> Self {
        Self { claims, notes }
    }

    /// Finds a claim by identifier
    pub fn find_claim(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.iter().find(|claim| &claim.id == id)
    }

    /// Finds the case notes for a claim
    pub fn find_notes(&self, id: &ClaimId) -> Option<&NoteCollection> {
        self.notes.get(id.as_str())
    }

    /// Like [`find_claim`](Self::find_claim) but reports a missing claim as an error
    pub fn require_claim(&self, id: &ClaimId) -> Result<&Claim, ClaimError> {
        self.find_claim(id)
            .ok_or_else(|| ClaimError::ClaimNotFound(id.to_string()))
    }

    /// Like [`find_notes`](Self::find_notes) but reports missing notes as an error
    pub fn require_notes(&self, id: &ClaimId) -> Result<&NoteCollection, ClaimError> {
        self.find_notes(id)
            .ok_or_else(|| ClaimError::NotesNotFound(id.to_string()))
    }

    /// All loaded claims, in document order
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Identifiers of all loaded claims, in document order
    pub fn claim_ids(&self) -> impl Iterator<Item = &ClaimId> {
        self.claims.iter().map(|claim| &claim.id)
    }

    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }

    pub fn notes_count(&self) -> usize {
        self.notes.len()
    }
}
