//! Tests for startup document loading

use std::io::Write;

use core_kernel::ClaimId;
use domain_claims::NoteCollection;
use infra_external::{load_all, load_claims, load_notes, DocumentError};
use tempfile::NamedTempFile;
use test_utils::DocumentFixtures;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_all_builds_store() {
    let claims = write_temp(&DocumentFixtures::claims_json());
    let notes = write_temp(&DocumentFixtures::notes_json());

    let store = load_all(claims.path(), notes.path()).unwrap();

    assert_eq!(store.claim_count(), 2);
    assert_eq!(store.notes_count(), 2);
    let id = ClaimId::parse("CLM001").unwrap();
    assert_eq!(store.find_claim(&id).unwrap().claim_type, "theft");
    assert_eq!(
        store.find_notes(&id).unwrap().joined(),
        "Customer reported theft on Monday. Police report received."
    );
}

#[test]
fn test_extra_claim_fields_are_kept() {
    let claims = write_temp(&DocumentFixtures::claims_json());
    let loaded = load_claims(claims.path()).unwrap();
    assert_eq!(loaded[0].extra["policyNumber"], "POL-100234");
}

#[test]
fn test_both_note_layouts_load() {
    let notes = write_temp(
        r#"{
            "CLM001": ["first entry", "second entry"],
            "CLM002": "plain text",
            "CLM003": {"notes": ["wrapped entry"]},
            "CLM004": {"notes": "wrapped text"}
        }"#,
    );

    let loaded = load_notes(notes.path()).unwrap();

    assert_eq!(
        loaded["CLM001"],
        NoteCollection::Entries(vec!["first entry".into(), "second entry".into()])
    );
    assert_eq!(loaded["CLM002"], NoteCollection::Text("plain text".into()));
    assert_eq!(loaded["CLM003"].joined(), "wrapped entry");
    assert_eq!(loaded["CLM004"].joined(), "wrapped text");
}

#[test]
fn test_missing_file_names_path() {
    let notes = write_temp(&DocumentFixtures::notes_json());
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("claims.json");

    let err = load_all(&missing, notes.path()).unwrap_err();

    assert!(err.is_io());
    assert_eq!(err.path(), missing.as_path());
    assert!(err.to_string().contains("claims.json"));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let claims = write_temp("[{\"id\": \"CLM001\",");
    let notes = write_temp(&DocumentFixtures::notes_json());

    let err = load_all(claims.path(), notes.path()).unwrap_err();

    assert!(matches!(err, DocumentError::Parse { .. }));
    assert_eq!(err.path(), claims.path());
}

#[test]
fn test_claim_with_malformed_id_is_skipped() {
    let claims = write_temp(
        r#"[
            {"id": "CLAIM-1", "claimNumber": "X", "type": "auto", "status": "open", "estimatedAmount": 10},
            {"id": "CLM007", "claimNumber": "CN-7", "type": "auto", "status": "open", "estimatedAmount": 10}
        ]"#,
    );

    let loaded = load_claims(claims.path()).unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id.as_str(), "CLM007");
}

#[test]
fn test_claim_missing_required_field_is_parse_error() {
    let claims = write_temp(r#"[{"id": "CLM001", "type": "auto"}]"#);

    let err = load_claims(claims.path()).unwrap_err();

    assert!(matches!(err, DocumentError::Parse { .. }));
    assert_eq!(err.path(), claims.path());
}

#[test]
fn test_null_notes_entry_is_dropped() {
    let claims = write_temp(&DocumentFixtures::claims_json());
    let notes = write_temp(r#"{"CLM001": {"notes": ["a"]}, "CLM002": null}"#);

    let store = load_all(claims.path(), notes.path()).unwrap();

    assert_eq!(store.notes_count(), 1);
    assert!(store.find_notes(&ClaimId::parse("CLM001").unwrap()).is_some());
    assert!(store.find_notes(&ClaimId::parse("CLM002").unwrap()).is_none());
}

#[test]
fn test_malformed_notes_rejected() {
    let claims = write_temp(&DocumentFixtures::claims_json());
    let notes = write_temp("[1, 2, 3]");

    let err = load_all(claims.path(), notes.path()).unwrap_err();

    assert_eq!(err.path(), notes.path());
}

#[test]
fn test_bundled_sample_documents_load() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../mocks");

    let store = load_all(root.join("claims.json"), root.join("notes.json")).unwrap();

    assert_eq!(store.claim_count(), 5);
    let theft = store.find_claim(&ClaimId::parse("CLM001").unwrap()).unwrap();
    assert_eq!(theft.status, "in-review");
    assert!(store.find_notes(&ClaimId::parse("CLM003").unwrap()).is_none());
}
