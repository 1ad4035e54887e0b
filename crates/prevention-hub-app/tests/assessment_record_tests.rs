//! Integration tests for assessment record serialization.

mod common;

use std::sync::Arc;

use common::FixedProbability;
use prevention_hub_app::render::assess_draft;
use prevention_hub_app::{AssessmentRecord, RECORD_SCHEMA_VERSION_V1, ScoringEngine};
use prevention_hub_core::{AssessmentInput, Field, RiskAssessment};
use prevention_hub_ui::SessionContext;
use serde_json::Value;
use time::macros::date;

#[test]
fn assessment_record_tests_json_shape() {
    let input = AssessmentInput::default()
        .resolve()
        .expect("defaults should resolve");
    let record = AssessmentRecord::new(
        "session-abc",
        date!(2025-06-01),
        input,
        &RiskAssessment::from_probability(Some(0.34)),
        Some("ab".repeat(32)),
    );

    let json: Value = serde_json::from_str(&record.to_json().expect("record should encode"))
        .expect("record should be valid JSON");

    assert_eq!(json["schema_version"], RECORD_SCHEMA_VERSION_V1);
    assert_eq!(json["assessed_on"], "2025-06-01");
    assert_eq!(json["risk_level"], "Moderate");
    assert_eq!(json["probability"], 0.34);
    assert_eq!(json["input"]["glucose"], 100.0);
}

#[test]
fn assessment_record_tests_unavailable_has_null_probability() {
    let input = AssessmentInput::default()
        .resolve()
        .expect("defaults should resolve");
    let record = AssessmentRecord::new(
        "session-abc",
        date!(2025-06-01),
        input,
        &RiskAssessment::unavailable(),
        None,
    );

    let json: Value = serde_json::from_str(&record.to_json().expect("record should encode"))
        .expect("record should be valid JSON");
    assert!(json["probability"].is_null());
    assert_eq!(json["risk_level"], "Unavailable");
}

#[test]
fn assessment_record_tests_assess_draft_records_history() {
    let engine = ScoringEngine::with_classifier(Arc::new(FixedProbability::new(0.55)), "fp");
    let mut session = SessionContext::with_session_id("session-abc", "guest");
    session
        .draft
        .set(Field::Glucose, Some(150.0))
        .expect("glucose should be accepted");

    let record = assess_draft(&mut session, &engine, date!(2025-06-01))
        .expect("draft should be assessable");

    assert_eq!(record.session_id, "session-abc");
    assert_eq!(record.input.glucose, 150.0);
    assert_eq!(record.model_fingerprint.as_deref(), Some("fp"));
    assert_eq!(session.history().len(), 1);
    assert_eq!(
        session.last_assessment().and_then(|assessment| assessment.probability()),
        Some(0.55)
    );
}
