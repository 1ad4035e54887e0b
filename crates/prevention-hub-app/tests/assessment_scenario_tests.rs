//! Integration tests for end-to-end assessment scenarios.

mod common;

use std::sync::Arc;

use common::{Failing, FixedProbability};
use prevention_hub_app::{AppConfig, AppError, ScoringEngine};
use prevention_hub_core::{AssessmentInput, Field, RiskLevel};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn assessment_scenario_tests_defaults_score_low() {
    let classifier = Arc::new(FixedProbability::new(0.18));
    let engine = ScoringEngine::with_classifier(classifier.clone(), "test");

    let assessment = engine.assess(&AssessmentInput::default());

    assert_eq!(assessment.level(), RiskLevel::Low);
    assert_eq!(assessment.probability(), Some(0.18));

    let samples = classifier.samples();
    assert_eq!(samples.len(), 1);
    let expected = [0.0, 100.0, 80.0, 20.0, 50.0, 24.22, 0.5, 30.0];
    for (actual, expected) in samples[0].iter().zip(expected) {
        assert_close(*actual, expected, 0.01);
    }
}

#[test]
fn assessment_scenario_tests_high_glucose_scores_elevated() {
    let classifier = Arc::new(FixedProbability::new(0.62));
    let engine = ScoringEngine::with_classifier(classifier.clone(), "test");
    let input = AssessmentInput::default()
        .with(Field::Glucose, 180.0)
        .with(Field::BloodPressure, 95.0)
        .with(Field::Weight, 95.0)
        .with(Field::Height, 1.60);

    let assessment = engine.assess(&input);

    assert_eq!(assessment.level(), RiskLevel::Elevated);
    assert_close(assessment.percent().expect("percent should exist"), 62.0, 1e-9);

    let sample = &classifier.samples()[0];
    assert_eq!(sample[1], 180.0);
    assert_eq!(sample[2], 95.0);
    assert_close(sample[5], 37.11, 0.01);
}

#[test]
fn assessment_scenario_tests_missing_artifact_is_unavailable() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let config = AppConfig {
        model_path: dir.path().join("trained_model.json"),
        ..AppConfig::default()
    };
    let engine = ScoringEngine::load(&config);

    let assessment = engine.assess(&AssessmentInput::default());

    assert_eq!(assessment.level(), RiskLevel::Unavailable);
    assert_eq!(assessment.probability(), None);
    assert!(!engine.is_ready());
}

#[test]
fn assessment_scenario_tests_backend_failure_is_unavailable() {
    let engine = ScoringEngine::with_classifier(Arc::new(Failing), "test");
    let input = AssessmentInput::default();

    assert!(matches!(
        engine.try_assess(&input),
        Err(AppError::Classifier(_))
    ));
    assert_eq!(engine.assess(&input).level(), RiskLevel::Unavailable);
}

#[test]
fn assessment_scenario_tests_negative_input_is_unavailable() {
    let classifier = Arc::new(FixedProbability::new(0.4));
    let engine = ScoringEngine::with_classifier(classifier.clone(), "test");
    let input = AssessmentInput::default().with(Field::Insulin, -1.0);

    assert!(matches!(engine.try_assess(&input), Err(AppError::Input(_))));
    assert_eq!(engine.assess(&input).level(), RiskLevel::Unavailable);
    assert!(classifier.samples().is_empty());
}
