//! Validates contract fixtures and live outputs against frozen JSON schemas.

use jsonschema::JSONSchema;
use prevention_hub_app::AssessmentRecord;
use prevention_hub_classifier::{artifact_fingerprint, parse_artifact};
use prevention_hub_core::{AssessmentInput, RiskAssessment};
use serde_json::Value;
use time::macros::date;

const ARTIFACT_SCHEMA: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../contracts/classifier-artifact.schema.json"
);
const ARTIFACT_FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../contracts/fixtures/classifier-artifact.valid.json"
);
const RECORD_SCHEMA: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../contracts/assessment-record.schema.json"
);
const RECORD_FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../contracts/fixtures/assessment-record.valid.json"
);

fn load_json(path: &str) -> Value {
    let raw = std::fs::read_to_string(path).expect("json file should be readable");
    serde_json::from_str(&raw).expect("json file should be valid")
}

fn compile_validator(schema_path: &str) -> JSONSchema {
    let schema = load_json(schema_path);
    JSONSchema::compile(&schema).expect("schema should compile")
}

#[test]
fn artifact_fixture_matches_schema() {
    let validator = compile_validator(ARTIFACT_SCHEMA);
    assert!(
        validator.is_valid(&load_json(ARTIFACT_FIXTURE)),
        "artifact fixture should validate against schema"
    );
}

#[test]
fn artifact_fixture_is_accepted_by_loader() {
    let raw = std::fs::read(ARTIFACT_FIXTURE).expect("fixture should be readable");
    let artifact = parse_artifact(&raw).expect("fixture should parse");
    assert_eq!(artifact.model, "pima-logreg-2024-05");
}

#[test]
fn reordered_artifact_violates_schema() {
    let validator = compile_validator(ARTIFACT_SCHEMA);
    let mut fixture = load_json(ARTIFACT_FIXTURE);
    fixture["feature_names"]
        .as_array_mut()
        .expect("feature_names should be an array")
        .swap(0, 7);
    assert!(!validator.is_valid(&fixture));
}

#[test]
fn record_fixture_matches_schema() {
    let validator = compile_validator(RECORD_SCHEMA);
    assert!(
        validator.is_valid(&load_json(RECORD_FIXTURE)),
        "record fixture should validate against schema"
    );
}

#[test]
fn emitted_records_match_schema() {
    let validator = compile_validator(RECORD_SCHEMA);
    let input = AssessmentInput::default()
        .resolve()
        .expect("defaults should resolve");
    let fingerprint = artifact_fingerprint(b"artifact");

    for (assessment, fingerprint) in [
        (RiskAssessment::from_probability(Some(0.42)), Some(fingerprint)),
        (RiskAssessment::unavailable(), None),
    ] {
        let record =
            AssessmentRecord::new("session-contract", date!(2025-06-01), input, &assessment, fingerprint);
        let json: Value = serde_json::from_str(&record.to_json().expect("record should encode"))
            .expect("record should be valid JSON");
        assert!(validator.is_valid(&json), "emitted record {json} should validate");
    }
}

#[test]
fn schema_ids_are_absolute_urls() {
    for path in [ARTIFACT_SCHEMA, RECORD_SCHEMA] {
        let schema = load_json(path);
        let id = schema["$id"].as_str().expect("schema should declare $id");
        assert!(id.starts_with("https://"), "{path} has relative $id {id}");
    }
}
