//! Strongly-typed identifiers for domain entities
//!
//! Claim identifiers are short human-readable codes (`CLM` followed by three
//! digits). Wrapping them in a newtype means every `ClaimId` in the system has
//! already passed format validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Human-readable description of the accepted claim identifier format
pub const CLAIM_ID_FORMAT: &str = "CLM### (e.g., CLM001)";

static CLAIM_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CLM[0-9]{3}$").expect("claim id pattern is valid"));

/// Identifier of a claim, e.g. `CLM001`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimId(String);

impl ClaimId {
    /// Parses and validates a claim identifier
    pub fn parse(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::invalid_identifier(value, CLAIM_ID_FORMAT))
        }
    }

    /// Returns true if the value matches the claim identifier format
    pub fn is_valid(value: &str) -> bool {
        CLAIM_ID_PATTERN.is_match(value)
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClaimId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClaimId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ClaimId> for String {
    fn from(id: ClaimId) -> String {
        id.0
    }
}

impl AsRef<str> for ClaimId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
