//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_claims::SummaryBundle;

/// Asserts that every narrative field of a bundle has visible text
///
/// # Panics
///
/// Panics naming the first empty or whitespace-only field
pub fn assert_bundle_complete(bundle: &SummaryBundle) {
    let fields = [
        ("summary", &bundle.summary),
        ("customerSummary", &bundle.customer_summary),
        ("adjusterSummary", &bundle.adjuster_summary),
        ("nextStep", &bundle.next_step),
    ];
    for (name, value) in fields {
        assert!(
            !value.trim().is_empty(),
            "Expected non-empty {} in bundle, got {:?}",
            name,
            bundle
        );
    }
}

/// Asserts that a bundle is the fixed remote-failure bundle
pub fn assert_service_failure(bundle: &SummaryBundle) {
    assert_eq!(
        bundle,
        &SummaryBundle::service_failure(),
        "Expected the service failure bundle"
    );
}

/// Asserts that `text` contains every one of `needles`
pub fn assert_contains_all(text: &str, needles: &[&str]) {
    for needle in needles {
        assert!(
            text.contains(needle),
            "Expected {:?} to contain {:?}",
            text,
            needle
        );
    }
}
