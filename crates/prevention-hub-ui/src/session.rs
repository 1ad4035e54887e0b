//! Per-session state passed explicitly to page handlers.

use prevention_hub_core::{AssessmentInput, Field, ResolvedInput, RiskAssessment, validate_range};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::Date;
use tracing::{debug, info};

use crate::appointments::AppointmentBook;
use crate::forum::Forum;
use crate::history::{HistoryRecord, records_for};
use crate::{Page, UiError};

/// In-progress values of the assessment form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FormDraft {
    input: AssessmentInput,
}

impl FormDraft {
    /// Creates an empty draft; every field starts blank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft values.
    pub fn input(&self) -> &AssessmentInput {
        &self.input
    }

    /// Sets or clears one field after checking the widget range.
    ///
    /// # Errors
    /// Returns [`UiError::Input`] when the value is outside the form range;
    /// the draft is left unchanged.
    pub fn set(&mut self, field: Field, value: Option<f64>) -> Result<(), UiError> {
        if let Some(value) = value {
            validate_range(field, value)?;
        }
        self.input.set(field, value);
        Ok(())
    }

    /// BMI shown next to the weight/height inputs.
    pub fn live_bmi(&self) -> f64 {
        self.input.live_bmi()
    }

    /// Clears every field.
    pub fn clear(&mut self) {
        self.input = AssessmentInput::default();
    }
}

/// State owned by one user session. Dropped with the session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    session_id: String,
    user_id: String,
    page: Page,
    /// Assessment form draft.
    pub draft: FormDraft,
    /// Discussion forum threads.
    pub forum: Forum,
    /// Booked appointments.
    pub appointments: AppointmentBook,
    assessments: Vec<HistoryRecord>,
    last_assessment: Option<RiskAssessment>,
}

impl SessionContext {
    /// Starts a session for `user_id` with a random session id.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::with_session_id(generate_session_id(), user_id)
    }

    /// Starts a session with a caller-provided id.
    pub fn with_session_id(session_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        let session = Self {
            session_id: session_id.into(),
            user_id: user_id.into(),
            page: Page::RiskAssessment,
            draft: FormDraft::new(),
            forum: Forum::seeded(),
            appointments: AppointmentBook::new(),
            assessments: Vec::new(),
            last_assessment: None,
        };
        info!(session_id = %session.session_id, "session started");
        session
    }

    /// Opaque session identifier.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// User the session belongs to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Currently selected page.
    pub fn page(&self) -> Page {
        self.page
    }

    /// Switches the selected page.
    pub fn navigate(&mut self, page: Page) {
        debug!(session_id = %self.session_id, page = page.title(), "navigate");
        self.page = page;
    }

    /// Most recent assessment of this session.
    pub fn last_assessment(&self) -> Option<&RiskAssessment> {
        self.last_assessment.as_ref()
    }

    /// Stores the outcome of one "assess" action.
    ///
    /// Only assessments with a probability enter the history; unavailable
    /// results are kept as the last assessment so the page can show them.
    pub fn record_assessment(&mut self, date: Date, input: &ResolvedInput, assessment: RiskAssessment) {
        self.last_assessment = Some(assessment);

        let Some(risk_probability) = assessment.probability() else {
            return;
        };

        self.assessments.push(HistoryRecord {
            date,
            age: input.age,
            pregnancies: input.pregnancies,
            glucose: input.glucose,
            blood_pressure: input.blood_pressure,
            skin_thickness: input.skin_thickness,
            insulin: input.insulin,
            bmi: input.bmi(),
            diabetes_pedigree_function: input.diabetes_pedigree_function,
            risk_probability,
        });
    }

    /// Stored history of the user plus this session's assessments, oldest
    /// first.
    pub fn history(&self) -> Vec<HistoryRecord> {
        let mut records = records_for(&self.user_id);
        records.extend(self.assessments.iter().copied());
        records.sort_by_key(|record| record.date);
        records
    }
}

fn generate_session_id() -> String {
    let mut rng = StdRng::from_os_rng();
    let bytes: [u8; 16] = rng.random();
    format!("session-{}", hex::encode(bytes))
}
