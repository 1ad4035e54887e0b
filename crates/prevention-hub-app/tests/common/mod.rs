//! Shared fixtures for app integration tests.

use std::path::PathBuf;
use std::sync::Mutex;

use prevention_hub_classifier::{Classifier, ClassifierError};
use tempfile::TempDir;

/// Classifier returning a fixed positive-class probability and recording the
/// samples it was given.
#[allow(dead_code)]
pub struct FixedProbability {
    probability: f64,
    seen: Mutex<Vec<Vec<f64>>>,
}

#[allow(dead_code)]
impl FixedProbability {
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn samples(&self) -> Vec<Vec<f64>> {
        self.seen.lock().expect("sample log should not be poisoned").clone()
    }
}

impl Classifier for FixedProbability {
    fn name(&self) -> &str {
        "fixed-probability"
    }

    fn predict_proba(&self, sample: &[f64]) -> Result<Vec<f64>, ClassifierError> {
        self.seen
            .lock()
            .expect("sample log should not be poisoned")
            .push(sample.to_vec());
        Ok(vec![1.0 - self.probability, self.probability])
    }
}

/// Classifier that always fails.
#[allow(dead_code)]
pub struct Failing;

impl Classifier for Failing {
    fn name(&self) -> &str {
        "failing"
    }

    fn predict_proba(&self, _sample: &[f64]) -> Result<Vec<f64>, ClassifierError> {
        Err(ClassifierError::Backend("backend crashed".to_string()))
    }
}

/// Valid v1 logistic artifact.
#[allow(dead_code)]
pub const VALID_ARTIFACT: &str = r#"{
  "schema_version": "v1",
  "model": "pima-logreg-test",
  "feature_names": ["pregnancies", "glucose", "blood_pressure", "skin_thickness", "insulin", "bmi", "diabetes_pedigree_function", "age"],
  "coefficients": [0.123, 0.0352, -0.0133, 0.0006, -0.0012, 0.0897, 0.945, 0.0149],
  "intercept": -8.4
}"#;

/// Writes `contents` to `trained_model.json` in a fresh temp dir.
#[allow(dead_code)]
pub fn write_artifact(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("trained_model.json");
    std::fs::write(&path, contents).expect("artifact should be written");
    (dir, path)
}
