#![warn(missing_docs)]
//! # prevention-hub-ui
//!
//! ## Purpose
//! Defines the presentation-facing model of the prevention hub: risk
//! interpretation, page navigation, and the per-session state each page
//! reads and mutates.
//!
//! ## Responsibilities
//! - Map a [`RiskLevel`] to a tone and advisory message.
//! - Represent navigation as the closed [`Page`] enum.
//! - Own session-scoped form drafts, forum threads, appointments and history
//!   in an explicit [`SessionContext`].
//! - Provide the static article and about content.
//!
//! ## Data flow
//! Page handlers receive `&mut SessionContext`; the scoring result from the
//! app layer is passed to [`interpret`] and [`headline`] for display and
//! recorded with [`SessionContext::record_assessment`].
//!
//! ## Ownership and lifetimes
//! `SessionContext` owns all of its lists. Nothing here is global; dropping
//! the context drops the session.
//!
//! ## Error model
//! Form and CRUD validation failures return [`UiError`].
//!
//! ## Security and privacy notes
//! Logs carry session ids and record ids only, never measurements or free
//! text.

pub mod appointments;
pub mod content;
pub mod forum;
pub mod history;
pub mod session;

use std::str::FromStr;

use prevention_hub_core::{CoreError, RiskAssessment, RiskLevel};
use thiserror::Error;

pub use appointments::{Appointment, AppointmentBook, AppointmentRequest, AppointmentStatus};
pub use forum::{Forum, Post};
pub use history::{HistoryRecord, Metric, Period, RiskTrend};
pub use session::{FormDraft, SessionContext};

/// Display severity of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Positive outcome.
    Success,
    /// Neutral information.
    Info,
    /// Needs attention.
    Warning,
    /// Needs prompt action.
    Error,
}

/// Advisory shown below the risk headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    /// Display severity.
    pub tone: Tone,
    /// Static advisory text.
    pub message: &'static str,
}

/// Looks up the advisory for a risk level.
pub fn interpret(level: RiskLevel) -> Interpretation {
    match level {
        RiskLevel::Low => Interpretation {
            tone: Tone::Success,
            message: "Your estimated risk is relatively low. Continue to maintain a healthy lifestyle.",
        },
        RiskLevel::Moderate => Interpretation {
            tone: Tone::Warning,
            message: "Your estimated risk is moderate. Consider lifestyle adjustments and regular checkups.",
        },
        RiskLevel::Elevated => Interpretation {
            tone: Tone::Error,
            message: "Your estimated risk is elevated. It is strongly recommended to consult with a healthcare professional for further evaluation.",
        },
        RiskLevel::Unavailable => Interpretation {
            tone: Tone::Info,
            message: "Risk assessment unavailable.",
        },
    }
}

/// Result heading, e.g. `Estimated Diabetes Risk: Moderate (34.00%)`.
pub fn headline(assessment: &RiskAssessment) -> String {
    match assessment.percent() {
        Some(percent) => format!(
            "Estimated Diabetes Risk: {} ({percent:.2}%)",
            assessment.level()
        ),
        None => format!("Estimated Diabetes Risk: {}", assessment.level()),
    }
}

/// Top-level page of the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Risk assessment form and result.
    RiskAssessment,
    /// Prevention article reader.
    PreventionArticles,
    /// Assessment history charts.
    AssessmentHistory,
    /// Appointment booking and management.
    DoctorAppointment,
    /// About the hub.
    About,
    /// Community discussion forum.
    DiscussionForum,
}

impl Page {
    /// Pages in navigation menu order.
    pub const ALL: [Page; 6] = [
        Page::RiskAssessment,
        Page::PreventionArticles,
        Page::AssessmentHistory,
        Page::DoctorAppointment,
        Page::About,
        Page::DiscussionForum,
    ];

    /// Menu label.
    pub fn title(self) -> &'static str {
        match self {
            Page::RiskAssessment => "Risk Assessment",
            Page::PreventionArticles => "Prevention Articles",
            Page::AssessmentHistory => "Assessment History",
            Page::DoctorAppointment => "Doctor Appointment",
            Page::About => "About",
            Page::DiscussionForum => "Discussion Forum",
        }
    }
}

impl FromStr for Page {
    type Err = UiError;

    /// Parses a menu label, ignoring ASCII case and surrounding whitespace.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.title().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UiError::UnknownPage(wanted.to_string()))
    }
}

/// Presentation-layer validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum UiError {
    /// Form value rejected by range validation.
    #[error("invalid input: {0}")]
    Input(#[from] CoreError),
    /// Navigation label does not name a page.
    #[error("unknown page: {0}")]
    UnknownPage(String),
    /// Post title or content is blank.
    #[error("please enter both a title and content for your post")]
    EmptyPost,
    /// Comment text is blank.
    #[error("comment must not be empty")]
    EmptyComment,
    /// Post id does not exist in this session.
    #[error("unknown post: {0}")]
    UnknownPost(u64),
    /// Appointment date lies in the past.
    #[error("appointment date {0} is in the past")]
    PastDate(String),
    /// Appointment time is off the 30-minute grid.
    #[error("appointment time {0} is not on a 30-minute slot")]
    InvalidTimeSlot(String),
    /// Doctor, hospital or reason is not in the catalogue.
    #[error("unknown catalogue entry: {0}")]
    UnknownCatalogEntry(String),
    /// Appointment id does not exist in this session.
    #[error("unknown appointment: {0}")]
    UnknownAppointment(u64),
    /// Appointment was already cancelled.
    #[error("appointment {0} is already cancelled")]
    AlreadyCancelled(u64),
}

#[cfg(test)]
mod tests {
    //! Unit tests for interpretation and navigation.

    use super::*;

    #[test]
    fn every_level_has_an_interpretation() {
        assert_eq!(interpret(RiskLevel::Low).tone, Tone::Success);
        assert_eq!(interpret(RiskLevel::Moderate).tone, Tone::Warning);
        assert_eq!(interpret(RiskLevel::Elevated).tone, Tone::Error);
        assert_eq!(
            interpret(RiskLevel::Unavailable).message,
            "Risk assessment unavailable."
        );
    }

    #[test]
    fn page_labels_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.title().parse::<Page>(), Ok(page));
        }
        assert_eq!(
            " discussion forum ".parse::<Page>(),
            Ok(Page::DiscussionForum)
        );
        assert!("Settings".parse::<Page>().is_err());
    }
}
