//! Integration tests for the process-wide scoring entry point.

use prevention_hub_app::{MODEL_PATH_ENV, assess_risk, engine, try_assess_risk};
use prevention_hub_core::{AssessmentInput, RiskLevel};

#[test]
fn global_engine_tests_missing_artifact_never_panics() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let missing = dir.path().join("absent.json");

    // Safety:
    // - This is the only test in this binary and it runs before the engine
    //   is initialized.
    unsafe { std::env::set_var(MODEL_PATH_ENV, &missing) };

    assert!(engine().is_none());
    let assessment = assess_risk(&AssessmentInput::default());
    assert_eq!(assessment.level(), RiskLevel::Unavailable);
    assert_eq!(assessment.probability(), None);
    assert!(engine().is_some_and(|engine| !engine.is_ready()));

    let second = try_assess_risk(&AssessmentInput::default())
        .expect("missing classifier is not an error");
    assert_eq!(second.level(), RiskLevel::Unavailable);

    // Safety: see rationale above.
    unsafe { std::env::remove_var(MODEL_PATH_ENV) };
}
