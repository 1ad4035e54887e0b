#![warn(missing_docs)]
//! # prevention-hub-app
//!
//! ## Purpose
//! Orchestrates input resolution, feature assembly, classifier scoring and
//! risk bucketing for the prevention hub, and hosts the process-wide
//! classifier slot.
//!
//! ## Responsibilities
//! - Build runtime configuration from the environment.
//! - Load the classifier artifact once and expose its status.
//! - Run `assess_risk` without ever panicking or leaking an error.
//! - Serialize assessment outcomes as [`AssessmentRecord`] JSON.
//! - Render hub pages as plain text for the demo binary.
//!
//! ## Data flow
//! `AssessmentInput` -> resolve defaults -> `FeatureVector` -> classifier ->
//! positive-class probability -> `RiskLevel` -> `RiskAssessment`.
//!
//! ## Ownership and lifetimes
//! The [`ScoringEngine`] owns the loaded classifier and is immutable after
//! construction. The global engine lives in a `OnceLock` for the process
//! lifetime; session state is owned by callers.
//!
//! ## Error model
//! Subsystem failures are wrapped in [`AppError`] and categorized for runtime
//! observability. The infallible entry points convert every error into an
//! unavailable assessment.
//!
//! ## Security and privacy notes
//! - Measurements are health data: they are logged at `debug` only.
//! - Warnings carry error categories, never input values.
//! - The scoring kill switch can disable classification at startup.

pub mod render;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use prevention_hub_classifier::{
    ArtifactError, Classifier, ClassifierError, DEFAULT_ARTIFACT_PATH, LoadedClassifier,
    load_classifier, predict_probability,
};
use prevention_hub_core::{
    AssessmentInput, CoreError, FeatureVector, ResolvedInput, RiskAssessment, RiskLevel,
};
use prevention_hub_ui::history::DEMO_USER;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Build-time application version loaded from root `VERSION` file.
pub const APP_VERSION: &str = env!("PREVENTION_HUB_VERSION");

/// Env var overriding the classifier artifact path.
pub const MODEL_PATH_ENV: &str = "PREVENTION_HUB_MODEL_PATH";

/// Env var acting as the scoring kill switch.
pub const SCORING_ENABLED_ENV: &str = "PREVENTION_HUB_SCORING_ENABLED";

/// Env var selecting the user whose history is shown.
pub const USER_ENV: &str = "PREVENTION_HUB_USER";

/// Schema tag of serialized [`AssessmentRecord`] values.
pub const RECORD_SCHEMA_VERSION_V1: &str = "v1";

static ENGINE: OnceLock<ScoringEngine> = OnceLock::new();

/// Returns the app version sourced from root `VERSION`.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Checks the scoring kill-switch env var.
///
/// Semantics:
/// - Unset => scoring enabled.
/// - `0`, `false`, `off` (case-insensitive) => scoring disabled.
/// - Any other value => scoring enabled.
pub fn scoring_enabled_from_env() -> bool {
    match std::env::var(SCORING_ENABLED_ENV) {
        Ok(value) => {
            let normalized = value.trim().to_ascii_lowercase();
            !(normalized == "0" || normalized == "false" || normalized == "off")
        }
        Err(_) => true,
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Classifier artifact location.
    pub model_path: PathBuf,
    /// Whether classification runs at all.
    pub scoring_enabled: bool,
    /// User id whose stored history is shown.
    pub user_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            scoring_enabled: true,
            user_id: DEMO_USER.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Blank values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model_path: non_blank_env(MODEL_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            scoring_enabled: scoring_enabled_from_env(),
            user_id: non_blank_env(USER_ENV).unwrap_or(defaults.user_id),
        }
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Installs the global `tracing` subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Output goes to stderr
/// so rendered pages on stdout stay clean. Returns `false` when a subscriber
/// was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

/// Load state of the classifier, safe to display and log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierStatus {
    /// Classifier loaded and usable.
    Ready {
        /// Model identifier.
        model: String,
        /// SHA-256 of the artifact bytes.
        fingerprint: String,
    },
    /// Scoring turned off by the kill switch.
    Disabled,
    /// Artifact failed to load; the reason is the load error text.
    Unavailable {
        /// Load failure description.
        reason: String,
    },
}

#[derive(Debug)]
enum ClassifierSlot {
    Ready(LoadedClassifier),
    Disabled,
    Failed(ArtifactError),
}

/// Scores assessment inputs with an immutable classifier slot.
#[derive(Debug)]
pub struct ScoringEngine {
    slot: ClassifierSlot,
}

impl ScoringEngine {
    /// Builds the engine from configuration.
    ///
    /// Never fails: a missing or invalid artifact leaves the engine in the
    /// unavailable state and every assessment reports `Unavailable`.
    pub fn load(config: &AppConfig) -> Self {
        if !config.scoring_enabled {
            warn!(env = SCORING_ENABLED_ENV, "risk scoring disabled by kill switch");
            return Self::disabled();
        }

        match load_classifier(&config.model_path) {
            Ok(loaded) => {
                info!(
                    model = loaded.classifier.name(),
                    fingerprint = %loaded.fingerprint,
                    "classifier artifact loaded"
                );
                Self::from_loaded(loaded)
            }
            Err(error) => {
                warn!(
                    path = %config.model_path.display(),
                    error = %error,
                    "classifier artifact unavailable; risk scoring disabled"
                );
                Self::unavailable(error)
            }
        }
    }

    /// Wraps an already loaded classifier.
    pub fn from_loaded(loaded: LoadedClassifier) -> Self {
        Self {
            slot: ClassifierSlot::Ready(loaded),
        }
    }

    /// Wraps an in-memory classifier with a caller-chosen fingerprint.
    pub fn with_classifier(classifier: Arc<dyn Classifier>, fingerprint: impl Into<String>) -> Self {
        Self::from_loaded(LoadedClassifier {
            classifier,
            fingerprint: fingerprint.into(),
        })
    }

    /// Engine whose artifact failed to load.
    pub fn unavailable(error: ArtifactError) -> Self {
        Self {
            slot: ClassifierSlot::Failed(error),
        }
    }

    /// Engine with scoring switched off.
    pub fn disabled() -> Self {
        Self {
            slot: ClassifierSlot::Disabled,
        }
    }

    /// Current classifier status.
    pub fn status(&self) -> ClassifierStatus {
        match &self.slot {
            ClassifierSlot::Ready(loaded) => ClassifierStatus::Ready {
                model: loaded.classifier.name().to_string(),
                fingerprint: loaded.fingerprint.clone(),
            },
            ClassifierSlot::Disabled => ClassifierStatus::Disabled,
            ClassifierSlot::Failed(error) => ClassifierStatus::Unavailable {
                reason: error.to_string(),
            },
        }
    }

    /// Returns `true` when assessments can produce a probability.
    pub fn is_ready(&self) -> bool {
        matches!(self.slot, ClassifierSlot::Ready(_))
    }

    /// Fingerprint of the loaded artifact, if any.
    pub fn fingerprint(&self) -> Option<&str> {
        match &self.slot {
            ClassifierSlot::Ready(loaded) => Some(&loaded.fingerprint),
            ClassifierSlot::Disabled | ClassifierSlot::Failed(_) => None,
        }
    }

    fn classifier(&self) -> Option<&dyn Classifier> {
        match &self.slot {
            ClassifierSlot::Ready(loaded) => Some(loaded.classifier.as_ref()),
            ClassifierSlot::Disabled | ClassifierSlot::Failed(_) => None,
        }
    }

    /// Runs the full assessment pipeline.
    ///
    /// An engine without a classifier returns an unavailable assessment, not
    /// an error.
    ///
    /// # Errors
    /// - [`AppError::Input`] when a supplied value is negative or non-finite.
    /// - [`AppError::Classifier`] when scoring fails or the output is not a
    ///   probability.
    pub fn try_assess(&self, input: &AssessmentInput) -> Result<RiskAssessment, AppError> {
        let resolved = input.resolve()?;
        self.try_assess_resolved(&resolved)
    }

    /// Scores an input whose defaults are already resolved.
    ///
    /// # Errors
    /// Returns [`AppError::Classifier`] when scoring fails.
    pub fn try_assess_resolved(&self, resolved: &ResolvedInput) -> Result<RiskAssessment, AppError> {
        let vector = FeatureVector::from_resolved(resolved);
        debug!(features = ?vector.values(), "feature vector assembled");

        let probability = predict_probability(self.classifier(), &vector)?;
        let assessment = RiskAssessment::from_probability(probability);
        info!(level = %assessment.level(), "risk assessed");
        Ok(assessment)
    }

    /// Infallible assessment: any failure yields `Unavailable`.
    pub fn assess(&self, input: &AssessmentInput) -> RiskAssessment {
        self.try_assess(input).unwrap_or_else(|error| {
            warn!(category = error.category(), "risk assessment unavailable");
            RiskAssessment::unavailable()
        })
    }
}

/// Initializes the process-wide engine once and returns it.
///
/// Later calls return the first engine regardless of `config`.
pub fn init_engine(config: &AppConfig) -> &'static ScoringEngine {
    ENGINE.get_or_init(|| ScoringEngine::load(config))
}

/// Returns the process-wide engine if it was initialized.
pub fn engine() -> Option<&'static ScoringEngine> {
    ENGINE.get()
}

fn global_engine() -> &'static ScoringEngine {
    ENGINE.get_or_init(|| ScoringEngine::load(&AppConfig::from_env()))
}

/// Scores `input` with the process-wide engine.
///
/// Initializes the engine from the environment on first use. Never panics;
/// failures are logged and reported as `Unavailable`.
pub fn assess_risk(input: &AssessmentInput) -> RiskAssessment {
    global_engine().assess(input)
}

/// Like [`assess_risk`] but returns the failure detail.
///
/// # Errors
/// See [`ScoringEngine::try_assess`].
pub fn try_assess_risk(input: &AssessmentInput) -> Result<RiskAssessment, AppError> {
    global_engine().try_assess(input)
}

/// Serializable outcome of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Record schema version.
    pub schema_version: String,
    /// Session that produced the record.
    pub session_id: String,
    /// Assessment day, `YYYY-MM-DD`.
    pub assessed_on: String,
    /// Resolved measurements.
    pub input: ResolvedInput,
    /// BMI derived from weight and height.
    pub bmi: f64,
    /// Positive-class probability; absent when unavailable.
    pub probability: Option<f64>,
    /// Risk bucket.
    pub risk_level: RiskLevel,
    /// Fingerprint of the artifact that scored the input.
    pub model_fingerprint: Option<String>,
}

impl AssessmentRecord {
    /// Builds a v1 record.
    pub fn new(
        session_id: impl Into<String>,
        assessed_on: Date,
        input: ResolvedInput,
        assessment: &RiskAssessment,
        model_fingerprint: Option<String>,
    ) -> Self {
        Self {
            schema_version: RECORD_SCHEMA_VERSION_V1.to_string(),
            session_id: session_id.into(),
            assessed_on: prevention_hub_ui::appointments::format_date(assessed_on),
            bmi: input.bmi(),
            input,
            probability: assessment.probability(),
            risk_level: assessment.level(),
            model_fingerprint,
        }
    }

    /// Serializes the record as JSON.
    ///
    /// # Errors
    /// Returns [`AppError::Serialize`] when encoding fails.
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self).map_err(AppError::Serialize)
    }
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input validation error.
    #[error("input error: {0}")]
    Input(#[from] CoreError),
    /// Classifier evaluation error.
    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),
    /// Artifact load error.
    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),
    /// Record serialization error.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    /// Stable category label for logs.
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Input(_) => "input",
            AppError::Classifier(_) => "classifier",
            AppError::Artifact(_) => "artifact",
            AppError::Serialize(_) => "serialize",
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for engine state handling.

    use super::*;

    #[test]
    fn disabled_engine_reports_unavailable() {
        let engine = ScoringEngine::disabled();
        assert_eq!(engine.status(), ClassifierStatus::Disabled);
        assert!(!engine.is_ready());
        assert_eq!(
            engine.assess(&AssessmentInput::default()),
            RiskAssessment::unavailable()
        );
    }

    #[test]
    fn missing_artifact_status_carries_reason() {
        let engine = ScoringEngine::unavailable(ArtifactError::Missing("x.json".to_string()));
        let ClassifierStatus::Unavailable { reason } = engine.status() else {
            panic!("expected unavailable status");
        };
        assert!(reason.contains("x.json"));
        assert_eq!(engine.fingerprint(), None);
    }

    #[test]
    fn error_categories_are_stable() {
        let error = AppError::from(ClassifierError::Backend("boom".to_string()));
        assert_eq!(error.category(), "classifier");
    }
}
