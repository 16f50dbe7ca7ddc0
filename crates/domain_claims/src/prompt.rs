//! Prompt construction for claim summaries

use crate::claim::Claim;

/// Notes beyond this many characters are dropped before prompting
pub const MAX_NOTES_CHARS: usize = 4000;

/// System instruction sent with every summary request
pub const SYSTEM_INSTRUCTION: &str = "You are an experienced insurance claims analyst. \
Generate natural language summaries as simple strings, not structured data. \
Return ONLY valid JSON with exactly 4 string fields.";

/// Truncates notes to at most [`MAX_NOTES_CHARS`] characters
pub fn truncate_notes(notes: &str) -> &str {
    match notes.char_indices().nth(MAX_NOTES_CHARS) {
        Some((cut, _)) => &notes[..cut],
        None => notes,
    }
}

/// Builds the user prompt for a claim and its (already truncated) notes
pub fn build_user_prompt(claim: &Claim, notes: &str) -> String {
    let notes = if notes.is_empty() {
        "(no notes available)"
    } else {
        notes
    };

    format!(
        r#"Generate claim summaries as JSON with these exact keys: summary, customerSummary, adjusterSummary, nextStep.

Each value must be a single narrative string (not objects or arrays).

Claim Details:
- ID: {id}
- Claim Number: {number}
- Type: {claim_type}
- Status: {status}
- Amount: ${amount}
- Description: {description}

Notes: {notes}

Return format example:
{{
  "summary": "Brief professional overview of the claim in 1-2 sentences",
  "customerSummary": "Customer-friendly explanation of current status and what happens next",
  "adjusterSummary": "Technical assessment for adjusters with key details and next actions",
  "nextStep": "Specific next action to take on this claim"
}}"#,
        id = claim.id,
        number = claim.claim_number,
        claim_type = claim.claim_type,
        status = claim.status,
        amount = claim.estimate_display(),
        description = claim.description,
        notes = notes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_notes_unchanged() {
        assert_eq!(truncate_notes("short"), "short");
        assert_eq!(truncate_notes(""), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let notes = "é".repeat(MAX_NOTES_CHARS + 10);
        let truncated = truncate_notes(&notes);
        assert_eq!(truncated.chars().count(), MAX_NOTES_CHARS);
    }

    #[test]
    fn test_truncate_exact_limit() {
        let notes = "x".repeat(MAX_NOTES_CHARS);
        assert_eq!(truncate_notes(&notes).len(), MAX_NOTES_CHARS);
    }
}
