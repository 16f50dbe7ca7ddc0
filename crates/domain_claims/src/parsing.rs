//! Reading summary fields out of free-form completion text
//!
//! Completion services are asked for a flat JSON object but routinely wrap it
//! in prose or code fences, nest objects where strings were requested, or
//! ignore the format entirely. Parsing therefore happens in two stages:
//!
//! 1. [`parse_structured`]: locate the first JSON object and read the four
//!    keys from it, rejecting nested `summary` / `customerSummary` values.
//! 2. [`sentence_fallback`]: if that fails, split the text into sentences and
//!    assign them to the fields in order.

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::SummaryParseError;

const MIN_SENTENCE_CHARS: usize = 10;
const RAW_PREVIEW_CHARS: usize = 200;

pub const FALLBACK_SUMMARY: &str = "AI summary generation failed";
pub const FALLBACK_CUSTOMER_SUMMARY: &str = "Please check back for updates on your claim";
pub const FALLBACK_ADJUSTER_SUMMARY: &str = "Manual review required for this claim";
pub const FALLBACK_NEXT_STEP: &str = "Continue standard claim processing workflow";

/// The four narrative fields as read from a completion, before defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryFields {
    pub summary: Option<String>,
    pub customer_summary: Option<String>,
    pub adjuster_summary: Option<String>,
    pub next_step: Option<String>,
}

/// Returns the first top-level `{...}` region of `raw`
///
/// Braces inside JSON string literals are ignored. When the braces never
/// balance, the span from the first `{` to the last `}` is returned; text
/// without any `{ ... }` pair is returned unchanged.
pub fn extract_json_block(raw: &str) -> &str {
    let Some(start) = raw.find('{') else {
        return raw;
    };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return &raw[start..=start + offset];
                }
            }
            _ => {}
        }
    }

    match raw.rfind('}') {
        Some(end) if end > start => &raw[start..=end],
        _ => raw,
    }
}

/// Parses the JSON object embedded in `raw` into summary fields
pub fn parse_structured(raw: &str) -> Result<SummaryFields, SummaryParseError> {
    let candidate = extract_json_block(raw);
    let value: Value = serde_json::from_str(candidate)?;
    let Value::Object(object) = value else {
        return Err(SummaryParseError::NotAnObject);
    };

    for key in ["summary", "customerSummary"] {
        if matches!(object.get(key), Some(Value::Object(_) | Value::Array(_))) {
            return Err(SummaryParseError::NestedField(key));
        }
    }

    Ok(SummaryFields {
        summary: field_text(&object, "summary"),
        customer_summary: field_text(&object, "customerSummary"),
        adjuster_summary: field_text(&object, "adjusterSummary"),
        next_step: field_text(&object, "nextStep"),
    })
}

fn field_text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        nested => Some(nested.to_string()),
    }
}

/// Splits text on runs of `.`, `!` and `?`, keeping trimmed fragments longer
/// than ten characters
pub fn split_sentences(raw: &str) -> Vec<String> {
    raw.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Assigns the first four sentences of `raw` to the summary fields in order
///
/// Positions with no sentence get a fixed phrase for that field.
pub fn sentence_fallback(raw: &str) -> SummaryFields {
    let mut sentences = split_sentences(raw).into_iter().map(|s| format!("{}.", s));
    let mut next_or = |fallback: &str| Some(sentences.next().unwrap_or_else(|| fallback.to_string()));

    SummaryFields {
        summary: next_or(FALLBACK_SUMMARY),
        customer_summary: next_or(FALLBACK_CUSTOMER_SUMMARY),
        adjuster_summary: next_or(FALLBACK_ADJUSTER_SUMMARY),
        next_step: next_or(FALLBACK_NEXT_STEP),
    }
}

/// Reads summary fields from raw completion text, degrading to sentence
/// splitting when the text is not a conforming JSON object
pub fn parse_summary_fields(raw: &str) -> SummaryFields {
    match parse_structured(raw) {
        Ok(fields) => fields,
        Err(e) => {
            let preview: String = raw.chars().take(RAW_PREVIEW_CHARS).collect();
            warn!(error = %e, raw = %preview, "AI JSON parse failed, using sentence fallback");
            sentence_fallback(raw)
        }
    }
}
