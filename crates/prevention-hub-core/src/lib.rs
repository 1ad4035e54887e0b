#![warn(missing_docs)]
//! # prevention-hub-core
//!
//! ## Purpose
//! Defines the pure data model and arithmetic of the diabetes risk scoring
//! pipeline used across the `prevention-hub` workspace.
//!
//! ## Responsibilities
//! - Represent optional user measurements and resolve them against fixed
//!   defaults.
//! - Derive BMI from resolved weight/height.
//! - Assemble the fixed-order feature vector consumed by the classifier.
//! - Bucket a positive-class probability into a [`RiskLevel`].
//!
//! ## Data flow
//! Form layer fills an [`AssessmentInput`] -> [`AssessmentInput::resolve`]
//! produces a [`ResolvedInput`] -> [`FeatureVector::from_resolved`] ->
//! classifier adapter -> [`bucket`] -> [`RiskAssessment`].
//!
//! ## Ownership and lifetimes
//! Every value here is a small `Copy` or owned struct. Assessments are created
//! once and never mutated; fields are private behind accessors.
//!
//! ## Error model
//! Negative, non-finite, or out-of-range measurements return [`CoreError`].
//! Resolution and arithmetic never fail otherwise.
//!
//! ## Security and privacy notes
//! Measurements are personal health data. This crate never logs them.
//!
//! ## Example
//! ```rust
//! use prevention_hub_core::{AssessmentInput, FeatureVector, RiskLevel, bucket};
//!
//! let resolved = AssessmentInput::default().resolve().expect("defaults are valid");
//! let vector = FeatureVector::from_resolved(&resolved);
//! assert_eq!(vector.values()[1], 100.0);
//! assert_eq!(bucket(Some(0.18)), RiskLevel::Low);
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version tag of the feature order contract shared with the classifier.
pub const FEATURE_ORDER_VERSION: &str = "v1";

/// Number of features the classifier expects.
pub const FEATURE_COUNT: usize = 8;

/// Feature names in the exact order the classifier was fitted on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "pregnancies",
    "glucose",
    "blood_pressure",
    "skin_thickness",
    "insulin",
    "bmi",
    "diabetes_pedigree_function",
    "age",
];

/// Probabilities at or above this value are at least [`RiskLevel::Moderate`].
pub const LOW_MODERATE_THRESHOLD: f64 = 0.20;

/// Probabilities at or above this value are [`RiskLevel::Elevated`].
pub const MODERATE_ELEVATED_THRESHOLD: f64 = 0.50;

/// Default age in years.
pub const DEFAULT_AGE: f64 = 30.0;
/// Default weight in kilograms.
pub const DEFAULT_WEIGHT: f64 = 70.0;
/// Default height in meters.
pub const DEFAULT_HEIGHT: f64 = 1.70;
/// Default number of pregnancies.
pub const DEFAULT_PREGNANCIES: f64 = 0.0;
/// Default plasma glucose (mg/dL).
pub const DEFAULT_GLUCOSE: f64 = 100.0;
/// Default diastolic blood pressure (mmHg).
pub const DEFAULT_BLOOD_PRESSURE: f64 = 80.0;
/// Default triceps skin fold thickness (mm).
pub const DEFAULT_SKIN_THICKNESS: f64 = 20.0;
/// Default serum insulin (mu U/mL).
pub const DEFAULT_INSULIN: f64 = 50.0;
/// Default diabetes pedigree function score.
pub const DEFAULT_DIABETES_PEDIGREE_FUNCTION: f64 = 0.5;

/// One user-editable measurement of the assessment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Age in years.
    Age,
    /// Number of pregnancies.
    Pregnancies,
    /// Plasma glucose concentration.
    Glucose,
    /// Diastolic blood pressure.
    BloodPressure,
    /// Triceps skin fold thickness.
    SkinThickness,
    /// Two-hour serum insulin.
    Insulin,
    /// Body weight in kilograms.
    Weight,
    /// Body height in meters.
    Height,
    /// Diabetes pedigree function score.
    DiabetesPedigreeFunction,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 9] = [
        Field::Age,
        Field::Pregnancies,
        Field::Glucose,
        Field::BloodPressure,
        Field::SkinThickness,
        Field::Insulin,
        Field::Weight,
        Field::Height,
        Field::DiabetesPedigreeFunction,
    ];

    /// Stable snake_case identifier.
    pub fn name(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Pregnancies => "pregnancies",
            Field::Glucose => "glucose",
            Field::BloodPressure => "blood_pressure",
            Field::SkinThickness => "skin_thickness",
            Field::Insulin => "insulin",
            Field::Weight => "weight",
            Field::Height => "height",
            Field::DiabetesPedigreeFunction => "diabetes_pedigree_function",
        }
    }

    /// Human-readable form label including the unit.
    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age (years)",
            Field::Pregnancies => "Number of Pregnancies",
            Field::Glucose => "Glucose Level (mg/dL)",
            Field::BloodPressure => "Blood Pressure (mmHg)",
            Field::SkinThickness => "Skin Thickness (mm)",
            Field::Insulin => "Insulin Level (mu U/mL)",
            Field::Weight => "Weight (kg)",
            Field::Height => "Height (meters)",
            Field::DiabetesPedigreeFunction => "Diabetes Pedigree Function",
        }
    }

    /// Documented default used when the user leaves the field blank.
    pub fn default_value(self) -> f64 {
        match self {
            Field::Age => DEFAULT_AGE,
            Field::Pregnancies => DEFAULT_PREGNANCIES,
            Field::Glucose => DEFAULT_GLUCOSE,
            Field::BloodPressure => DEFAULT_BLOOD_PRESSURE,
            Field::SkinThickness => DEFAULT_SKIN_THICKNESS,
            Field::Insulin => DEFAULT_INSULIN,
            Field::Weight => DEFAULT_WEIGHT,
            Field::Height => DEFAULT_HEIGHT,
            Field::DiabetesPedigreeFunction => DEFAULT_DIABETES_PEDIGREE_FUNCTION,
        }
    }

    /// Inclusive range accepted by the form widgets.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Field::Age => 0.0..=120.0,
            Field::Pregnancies => 0.0..=20.0,
            Field::Glucose => 0.0..=300.0,
            Field::BloodPressure => 0.0..=200.0,
            Field::SkinThickness => 0.0..=100.0,
            Field::Insulin => 0.0..=850.0,
            Field::Weight => 20.0..=300.0,
            Field::Height => 0.5..=3.0,
            Field::DiabetesPedigreeFunction => 0.0..=3.0,
        }
    }

    /// Resolves a raw value against this field's documented default.
    pub fn resolve(self, raw: Option<f64>) -> f64 {
        resolve(self, raw, self.default_value())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `raw` when the user supplied it, otherwise `default`.
///
/// The field is carried for call-site readability only; resolution is the
/// same for every field.
pub fn resolve(_field: Field, raw: Option<f64>, default: f64) -> f64 {
    raw.unwrap_or(default)
}

/// Checks a manually entered value against the form range of `field`.
///
/// # Errors
/// Returns [`CoreError::NonFiniteField`] for NaN/infinite input and
/// [`CoreError::OutOfRange`] when the value lies outside [`Field::range`].
pub fn validate_range(field: Field, value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::NonFiniteField { field });
    }

    let range = field.range();
    if !range.contains(&value) {
        return Err(CoreError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }

    Ok(value)
}

/// User-supplied measurements; `None` means the field was left blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentInput {
    /// Age in years.
    pub age: Option<f64>,
    /// Number of pregnancies.
    pub pregnancies: Option<f64>,
    /// Plasma glucose (mg/dL).
    pub glucose: Option<f64>,
    /// Diastolic blood pressure (mmHg).
    pub blood_pressure: Option<f64>,
    /// Skin fold thickness (mm).
    pub skin_thickness: Option<f64>,
    /// Serum insulin (mu U/mL).
    pub insulin: Option<f64>,
    /// Weight (kg).
    pub weight: Option<f64>,
    /// Height (m).
    pub height: Option<f64>,
    /// Diabetes pedigree function score.
    pub diabetes_pedigree_function: Option<f64>,
}

impl AssessmentInput {
    /// Returns the raw value of one field.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Age => self.age,
            Field::Pregnancies => self.pregnancies,
            Field::Glucose => self.glucose,
            Field::BloodPressure => self.blood_pressure,
            Field::SkinThickness => self.skin_thickness,
            Field::Insulin => self.insulin,
            Field::Weight => self.weight,
            Field::Height => self.height,
            Field::DiabetesPedigreeFunction => self.diabetes_pedigree_function,
        }
    }

    /// Sets or clears one field.
    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Age => &mut self.age,
            Field::Pregnancies => &mut self.pregnancies,
            Field::Glucose => &mut self.glucose,
            Field::BloodPressure => &mut self.blood_pressure,
            Field::SkinThickness => &mut self.skin_thickness,
            Field::Insulin => &mut self.insulin,
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
            Field::DiabetesPedigreeFunction => &mut self.diabetes_pedigree_function,
        };
        *slot = value;
    }

    /// Builder-style variant of [`AssessmentInput::set`].
    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    /// BMI for live display, substituting defaults for blank weight/height.
    pub fn live_bmi(&self) -> f64 {
        bmi(Field::Weight.resolve(self.weight), Field::Height.resolve(self.height))
    }

    /// Resolves every blank field to its default and validates the result.
    ///
    /// # Errors
    /// Returns [`CoreError::NonFiniteField`] or [`CoreError::NegativeField`]
    /// for the first offending field in form order.
    pub fn resolve(&self) -> Result<ResolvedInput, CoreError> {
        for field in Field::ALL {
            let value = field.resolve(self.get(field));
            if !value.is_finite() {
                return Err(CoreError::NonFiniteField { field });
            }
            if value < 0.0 {
                return Err(CoreError::NegativeField { field, value });
            }
        }

        Ok(ResolvedInput {
            age: Field::Age.resolve(self.age),
            pregnancies: Field::Pregnancies.resolve(self.pregnancies),
            glucose: Field::Glucose.resolve(self.glucose),
            blood_pressure: Field::BloodPressure.resolve(self.blood_pressure),
            skin_thickness: Field::SkinThickness.resolve(self.skin_thickness),
            insulin: Field::Insulin.resolve(self.insulin),
            weight: Field::Weight.resolve(self.weight),
            height: Field::Height.resolve(self.height),
            diabetes_pedigree_function: Field::DiabetesPedigreeFunction
                .resolve(self.diabetes_pedigree_function),
        })
    }
}

/// Measurements with every blank replaced by its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInput {
    /// Age in years.
    pub age: f64,
    /// Number of pregnancies.
    pub pregnancies: f64,
    /// Plasma glucose (mg/dL).
    pub glucose: f64,
    /// Diastolic blood pressure (mmHg).
    pub blood_pressure: f64,
    /// Skin fold thickness (mm).
    pub skin_thickness: f64,
    /// Serum insulin (mu U/mL).
    pub insulin: f64,
    /// Weight (kg).
    pub weight: f64,
    /// Height (m).
    pub height: f64,
    /// Diabetes pedigree function score.
    pub diabetes_pedigree_function: f64,
}

impl ResolvedInput {
    /// BMI derived from the resolved weight and height.
    pub fn bmi(&self) -> f64 {
        bmi(self.weight, self.height)
    }
}

/// Body-mass index `weight / height^2`, or `0.0` when `height <= 0`.
pub fn bmi(weight: f64, height: f64) -> f64 {
    if height > 0.0 {
        return weight / (height * height);
    }
    0.0
}

/// Fixed-order classifier input. See [`FEATURE_NAMES`] for the order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Derives BMI and assembles the vector from resolved measurements.
    pub fn from_resolved(input: &ResolvedInput) -> Self {
        assemble(
            input.pregnancies,
            input.glucose,
            input.blood_pressure,
            input.skin_thickness,
            input.insulin,
            input.bmi(),
            input.diabetes_pedigree_function,
            input.age,
        )
    }

    /// Returns the values in contract order.
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    /// Borrows the values as a single-sample row.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Looks up one feature by its contract name.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|index| self.0[index])
    }

    /// Pairs each feature name with its value, in contract order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

/// Places the eight model inputs into contract order.
///
/// Changing this order is a breaking change to the classifier contract and
/// must bump [`FEATURE_ORDER_VERSION`].
#[allow(clippy::too_many_arguments)]
pub fn assemble(
    pregnancies: f64,
    glucose: f64,
    blood_pressure: f64,
    skin_thickness: f64,
    insulin: f64,
    bmi: f64,
    diabetes_pedigree_function: f64,
    age: f64,
) -> FeatureVector {
    FeatureVector([
        pregnancies,
        glucose,
        blood_pressure,
        skin_thickness,
        insulin,
        bmi,
        diabetes_pedigree_function,
        age,
    ])
}

/// Discrete risk category shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Probability below 0.20.
    Low,
    /// Probability in [0.20, 0.50).
    Moderate,
    /// Probability of 0.50 or more.
    Elevated,
    /// No valid probability was produced.
    Unavailable,
}

impl RiskLevel {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Elevated => "Elevated",
            RiskLevel::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a positive-class probability to a [`RiskLevel`].
///
/// Intervals are closed-open: exactly 0.20 is Moderate and exactly 0.50 is
/// Elevated. `None`, non-finite values and values outside [0, 1] map to
/// [`RiskLevel::Unavailable`].
pub fn bucket(probability: Option<f64>) -> RiskLevel {
    match probability {
        Some(p) if !(0.0..=1.0).contains(&p) => RiskLevel::Unavailable,
        Some(p) if p < LOW_MODERATE_THRESHOLD => RiskLevel::Low,
        Some(p) if p < MODERATE_ELEVATED_THRESHOLD => RiskLevel::Moderate,
        Some(_) => RiskLevel::Elevated,
        None => RiskLevel::Unavailable,
    }
}

/// Outcome of one "assess" action. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    probability: Option<f64>,
    level: RiskLevel,
}

impl RiskAssessment {
    /// Builds an assessment whose level is derived from `probability`.
    pub fn from_probability(probability: Option<f64>) -> Self {
        let level = bucket(probability);
        // Invariant: an Unavailable level never carries a probability.
        let probability = match level {
            RiskLevel::Unavailable => None,
            _ => probability,
        };
        Self { probability, level }
    }

    /// Assessment for a request that could not be scored.
    pub fn unavailable() -> Self {
        Self {
            probability: None,
            level: RiskLevel::Unavailable,
        }
    }

    /// Positive-class probability, when one was produced.
    pub fn probability(&self) -> Option<f64> {
        self.probability
    }

    /// Bucketed level.
    pub fn level(&self) -> RiskLevel {
        self.level
    }

    /// Probability as a percentage in [0, 100].
    pub fn percent(&self) -> Option<f64> {
        self.probability.map(|p| p * 100.0)
    }

    /// Returns `true` when a probability is present.
    pub fn is_available(&self) -> bool {
        self.level != RiskLevel::Unavailable
    }
}

/// Error type for measurement validation.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Measurements cannot be negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeField {
        /// Offending field.
        field: Field,
        /// Rejected value.
        value: f64,
    },
    /// NaN or infinite measurement.
    #[error("{field} must be a finite number")]
    NonFiniteField {
        /// Offending field.
        field: Field,
    },
    /// Manual entry outside the form range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Offending field.
        field: Field,
        /// Rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}
