#![warn(missing_docs)]
//! # prevention-hub-classifier
//!
//! ## Purpose
//! Loads the pre-trained diabetes classifier artifact and adapts it to the
//! scoring pipeline as an opaque probability function.
//!
//! ## Responsibilities
//! - Define the [`Classifier`] seam the pipeline depends on.
//! - Parse and validate versioned JSON artifacts into a [`LogisticClassifier`].
//! - Extract the positive-class probability from classifier output.
//!
//! ## Data flow
//! Artifact file -> [`load_classifier`] -> [`LoadedClassifier`] held by the
//! app for the process lifetime -> [`predict_probability`] per assessment.
//!
//! ## Ownership and lifetimes
//! Loaded classifiers are immutable after construction and are shared as
//! `Arc<dyn Classifier>`; no interior mutability is involved.
//!
//! ## Error model
//! Startup failures are [`ArtifactError`] (the scoring feature is disabled
//! but the app keeps running). Per-request failures are [`ClassifierError`]
//! and are never converted into a fabricated probability here.
//!
//! ## Security and privacy notes
//! Only the artifact fingerprint and model name are suitable for logs; feature
//! values are health data and are not logged by this crate.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use prevention_hub_core::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Canonical schema tag for v1 classifier artifacts.
pub const ARTIFACT_SCHEMA_VERSION_V1: &str = "v1";

/// Relative path the artifact is loaded from when nothing else is configured.
pub const DEFAULT_ARTIFACT_PATH: &str = "trained_model.json";

/// Opaque binary classifier: one sample in, per-class probabilities out.
pub trait Classifier: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Returns class probabilities for one sample row.
    ///
    /// Two-column output is `[negative, positive]`; a single column is the
    /// only probability the classifier exposes.
    ///
    /// # Errors
    /// Implementations report evaluation failures as [`ClassifierError`].
    fn predict_proba(&self, sample: &[f64]) -> Result<Vec<f64>, ClassifierError>;
}

/// Serialized logistic regression exported by the training pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticArtifact {
    /// Artifact schema version.
    pub schema_version: String,
    /// Model identifier.
    pub model: String,
    /// Feature names in fitted order.
    pub feature_names: Vec<String>,
    /// One coefficient per feature.
    pub coefficients: Vec<f64>,
    /// Intercept term.
    pub intercept: f64,
}

/// Parses and validates a classifier artifact.
///
/// # Errors
/// Returns [`ArtifactError::Decode`] for invalid JSON and
/// [`ArtifactError::InvalidArtifact`] when the artifact violates the schema
/// version, feature order, or coefficient shape contract.
pub fn parse_artifact(raw: &[u8]) -> Result<LogisticArtifact, ArtifactError> {
    let artifact: LogisticArtifact = serde_json::from_slice(raw).map_err(ArtifactError::Decode)?;

    if artifact.schema_version != ARTIFACT_SCHEMA_VERSION_V1 {
        return Err(ArtifactError::InvalidArtifact(format!(
            "unsupported schema_version {:?}",
            artifact.schema_version
        )));
    }

    if artifact.model.trim().is_empty() {
        return Err(ArtifactError::InvalidArtifact("model is empty".to_string()));
    }

    // Invariant:
    // - Names must match the feature order contract one-to-one; a reordered
    //   artifact would silently score the wrong columns.
    if artifact.feature_names.len() != FEATURE_COUNT
        || artifact
            .feature_names
            .iter()
            .zip(FEATURE_NAMES)
            .any(|(actual, expected)| actual != expected)
    {
        return Err(ArtifactError::InvalidArtifact(format!(
            "feature_names must be {FEATURE_NAMES:?}"
        )));
    }

    if artifact.coefficients.len() != FEATURE_COUNT {
        return Err(ArtifactError::InvalidArtifact(format!(
            "expected {FEATURE_COUNT} coefficients, got {}",
            artifact.coefficients.len()
        )));
    }

    if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
        return Err(ArtifactError::InvalidArtifact(
            "coefficients and intercept must be finite".to_string(),
        ));
    }

    Ok(artifact)
}

/// Lowercase hex SHA-256 of the raw artifact bytes.
pub fn artifact_fingerprint(raw: &[u8]) -> String {
    hex::encode(Sha256::digest(raw))
}

/// Classifier evaluated from a [`LogisticArtifact`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticClassifier {
    artifact: LogisticArtifact,
}

impl LogisticClassifier {
    /// Wraps a validated artifact.
    pub fn new(artifact: LogisticArtifact) -> Self {
        Self { artifact }
    }

    /// Returns the underlying artifact.
    pub fn artifact(&self) -> &LogisticArtifact {
        &self.artifact
    }
}

impl Classifier for LogisticClassifier {
    fn name(&self) -> &str {
        &self.artifact.model
    }

    fn predict_proba(&self, sample: &[f64]) -> Result<Vec<f64>, ClassifierError> {
        if sample.len() != self.artifact.coefficients.len() {
            return Err(ClassifierError::FeatureCount {
                expected: self.artifact.coefficients.len(),
                actual: sample.len(),
            });
        }

        let logit = self
            .artifact
            .coefficients
            .iter()
            .zip(sample)
            .map(|(weight, value)| weight * value)
            .sum::<f64>()
            + self.artifact.intercept;
        let positive = 1.0 / (1.0 + (-logit).exp());

        Ok(vec![1.0 - positive, positive])
    }
}

/// Classifier loaded from disk together with its provenance.
#[derive(Clone)]
pub struct LoadedClassifier {
    /// Shared classifier handle.
    pub classifier: Arc<dyn Classifier>,
    /// SHA-256 of the artifact bytes.
    pub fingerprint: String,
}

impl std::fmt::Debug for LoadedClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedClassifier")
            .field("classifier", &self.classifier.name())
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}

/// Reads, validates and wraps the artifact at `path`.
///
/// # Errors
/// Returns [`ArtifactError::Missing`] when the file does not exist,
/// [`ArtifactError::Unreadable`] for other I/O failures, and the
/// [`parse_artifact`] errors for malformed content.
pub fn load_classifier(path: impl AsRef<Path>) -> Result<LoadedClassifier, ArtifactError> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => ArtifactError::Missing(path.display().to_string()),
        _ => ArtifactError::Unreadable {
            path: path.display().to_string(),
            source: error,
        },
    })?;

    let artifact = parse_artifact(&raw)?;
    Ok(LoadedClassifier {
        classifier: Arc::new(LogisticClassifier::new(artifact)),
        fingerprint: artifact_fingerprint(&raw),
    })
}

/// Scores one feature vector with the loaded classifier, if any.
///
/// # Returns
/// - `Ok(None)` when no classifier is loaded.
/// - `Ok(Some(p))` with the positive-class probability otherwise.
///
/// # Errors
/// Propagates classifier failures and returns
/// [`ClassifierError::MalformedOutput`] when the output row is empty or holds
/// a value outside [0, 1].
pub fn predict_probability(
    classifier: Option<&dyn Classifier>,
    vector: &FeatureVector,
) -> Result<Option<f64>, ClassifierError> {
    let Some(classifier) = classifier else {
        return Ok(None);
    };

    let row = classifier.predict_proba(vector.as_slice())?;
    positive_class_probability(&row).map(Some)
}

fn positive_class_probability(row: &[f64]) -> Result<f64, ClassifierError> {
    let probability = match row {
        [] => {
            return Err(ClassifierError::MalformedOutput(
                "classifier returned no probabilities".to_string(),
            ));
        }
        [only] => *only,
        [_, positive, ..] => *positive,
    };

    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(ClassifierError::MalformedOutput(format!(
            "probability outside [0, 1]: {probability}"
        )));
    }

    Ok(probability)
}

/// Startup errors while loading the classifier artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file does not exist.
    #[error("classifier artifact not found at {0}")]
    Missing(String),
    /// Artifact exists but could not be read.
    #[error("classifier artifact at {path} is unreadable: {source}")]
    Unreadable {
        /// Artifact path.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Artifact is not valid JSON for the expected shape.
    #[error("classifier artifact decode failure: {0}")]
    Decode(#[from] serde_json::Error),
    /// Artifact decoded but violates the contract.
    #[error("classifier artifact contract violation: {0}")]
    InvalidArtifact(String),
}

/// Per-request classifier failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    /// Sample width does not match the model.
    #[error("classifier expects {expected} features, got {actual}")]
    FeatureCount {
        /// Model input width.
        expected: usize,
        /// Provided sample width.
        actual: usize,
    },
    /// Opaque backend failure.
    #[error("classifier backend failure: {0}")]
    Backend(String),
    /// Output could not be interpreted as a probability.
    #[error("malformed classifier output: {0}")]
    MalformedOutput(String),
}
