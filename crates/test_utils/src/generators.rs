//! Property-Based Test Generators
//!
//! Provides proptest strategies for claim identifiers and for the kinds of
//! raw text a completion service may send back.

use core_kernel::ClaimId;
use proptest::prelude::*;
use serde_json::json;

/// Strategy for well-formed claim identifiers
pub fn valid_claim_id_strategy() -> impl Strategy<Value = String> {
    (0u32..1000).prop_map(|n| format!("CLM{:03}", n))
}

/// Strategy for path segments that are not claim identifiers
///
/// Values are restricted to URL-safe characters so they can be used as a
/// path segment without encoding.
pub fn invalid_claim_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9_-]{1,12}",
        (0u32..10_000).prop_map(|n| format!("CLM{}", n)),
        "[0-9]{3}".prop_map(|digits| format!("clm{}", digits)),
        "[0-9]{3}".prop_map(|digits| format!("CLM-{}", digits)),
    ]
    .prop_filter("must not be a valid claim id", |value| !ClaimId::is_valid(value))
}

/// Strategy for arbitrary narrative text
fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.!?:;'-]{0,120}"
}

/// Strategy for JSON values a model might put where a string belongs
fn field_value_strategy() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        text_strategy().prop_map(serde_json::Value::from),
        Just(serde_json::Value::Null),
        any::<i64>().prop_map(serde_json::Value::from),
        any::<bool>().prop_map(serde_json::Value::from),
        text_strategy().prop_map(|t| json!({ "text": t })),
        text_strategy().prop_map(|t| json!([t])),
    ]
}

/// Strategy for a JSON object carrying any subset of the four summary keys
pub fn summary_object_strategy() -> impl Strategy<Value = String> {
    (
        proptest::option::of(field_value_strategy()),
        proptest::option::of(field_value_strategy()),
        proptest::option::of(field_value_strategy()),
        proptest::option::of(field_value_strategy()),
    )
        .prop_map(|(summary, customer, adjuster, next)| {
            let mut object = serde_json::Map::new();
            for (key, value) in [
                ("summary", summary),
                ("customerSummary", customer),
                ("adjusterSummary", adjuster),
                ("nextStep", next),
            ] {
                if let Some(value) = value {
                    object.insert(key.to_string(), value);
                }
            }
            serde_json::Value::Object(object).to_string()
        })
}

/// Strategy for raw completion text: empty, prose, partial or nested JSON,
/// and JSON wrapped in prose
pub fn raw_completion_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        text_strategy(),
        summary_object_strategy(),
        (text_strategy(), summary_object_strategy(), text_strategy())
            .prop_map(|(before, json, after)| format!("{} {} {}", before, json, after)),
        "\\PC{0,200}",
    ]
}
