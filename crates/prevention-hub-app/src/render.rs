//! Plain-text rendering of hub pages.

use prevention_hub_core::{Field, RiskAssessment};
use prevention_hub_ui::appointments::{format_date, format_time};
use prevention_hub_ui::content::{ABOUT_SECTIONS, ARTICLES, SIDEBAR_NOTE};
use prevention_hub_ui::history::{Metric, Period, metric_series, trend};
use prevention_hub_ui::{Page, SessionContext, headline, interpret};
use time::Date;
use tracing::warn;

use crate::{AppError, AssessmentRecord, ClassifierStatus, ScoringEngine};

/// Scores the session draft, records it in the session history and returns
/// the serializable outcome.
///
/// Classifier failures are folded into an unavailable assessment.
///
/// # Errors
/// Returns [`AppError::Input`] when the draft holds a negative or non-finite
/// value; nothing is recorded in that case.
pub fn assess_draft(
    session: &mut SessionContext,
    engine: &ScoringEngine,
    today: Date,
) -> Result<AssessmentRecord, AppError> {
    let resolved = session.draft.input().resolve()?;
    let assessment = engine.try_assess_resolved(&resolved).unwrap_or_else(|error| {
        warn!(
            session_id = session.session_id(),
            category = error.category(),
            "risk assessment unavailable"
        );
        RiskAssessment::unavailable()
    });

    session.record_assessment(today, &resolved, assessment);
    Ok(AssessmentRecord::new(
        session.session_id(),
        today,
        resolved,
        &assessment,
        engine.fingerprint().map(str::to_string),
    ))
}

/// Renders `page` for the session. The risk page runs an assessment of the
/// current draft when scoring is enabled.
pub fn render_page(
    page: Page,
    session: &mut SessionContext,
    engine: &ScoringEngine,
    today: Date,
) -> String {
    let mut lines = vec![page.title().to_string(), "=".repeat(page.title().len())];

    match page {
        Page::RiskAssessment => render_risk_assessment(&mut lines, session, engine, today),
        Page::PreventionArticles => render_articles(&mut lines),
        Page::AssessmentHistory => render_history(&mut lines, session),
        Page::DoctorAppointment => render_appointments(&mut lines, session),
        Page::About => render_about(&mut lines),
        Page::DiscussionForum => render_forum(&mut lines, session),
    }

    lines.push(String::new());
    lines.push(SIDEBAR_NOTE.to_string());
    lines.join("\n")
}

fn render_risk_assessment(
    lines: &mut Vec<String>,
    session: &mut SessionContext,
    engine: &ScoringEngine,
    today: Date,
) {
    for field in Field::ALL {
        let value = match session.draft.input().get(field) {
            Some(value) => format!("{value}"),
            None => format!("{} (default)", field.default_value()),
        };
        lines.push(format!("{}: {value}", field.label()));
    }
    lines.push(format!("Calculated BMI: {:.2}", session.draft.live_bmi()));
    lines.push(String::new());

    match engine.status() {
        ClassifierStatus::Disabled => {
            lines.push("Risk scoring is disabled.".to_string());
            return;
        }
        ClassifierStatus::Unavailable { reason } => {
            lines.push(format!("Classifier unavailable: {reason}"));
        }
        ClassifierStatus::Ready { .. } => {}
    }

    match assess_draft(session, engine, today) {
        Ok(record) => {
            let assessment = RiskAssessment::from_probability(record.probability);
            lines.push(headline(&assessment));
            lines.push(interpret(assessment.level()).message.to_string());
        }
        Err(error) => lines.push(format!("Invalid input: {error}")),
    }
}

fn render_articles(lines: &mut Vec<String>) {
    for article in &ARTICLES {
        lines.push(String::new());
        lines.push(format!("## {}", article.title));
        lines.push(article.body.trim().to_string());
    }
}

fn render_history(lines: &mut Vec<String>, session: &SessionContext) {
    let records = session.history();
    if records.is_empty() {
        lines.push("No assessment history available.".to_string());
        return;
    }

    for metric in Metric::ALL {
        lines.push(String::new());
        lines.push(format!("## {}", metric.title()));
        for point in metric_series(&records, Period::Month, metric) {
            lines.push(format!(
                "{}  {}  {:.2}",
                point.period,
                format_date(point.date),
                point.value
            ));
        }
    }

    let direction = trend(&records);
    lines.push(String::new());
    lines.push("## Recommendation".to_string());
    lines.push(direction.recommendation().to_string());
}

fn render_appointments(lines: &mut Vec<String>, session: &SessionContext) {
    if session.appointments.is_empty() {
        lines.push("No appointments booked yet.".to_string());
        return;
    }

    for appointment in session.appointments.sorted() {
        lines.push(format!(
            "#{} {} {} | {} | {} | {} | {}",
            appointment.id,
            format_date(appointment.date),
            format_time(appointment.time),
            appointment.doctor,
            appointment.hospital,
            appointment.reason,
            appointment.status.label()
        ));
    }
}

fn render_about(lines: &mut Vec<String>) {
    for section in &ABOUT_SECTIONS {
        lines.push(String::new());
        lines.push(format!("## {}", section.heading));
        lines.push(section.body.trim().to_string());
    }
}

fn render_forum(lines: &mut Vec<String>, session: &SessionContext) {
    for post in session.forum.posts() {
        lines.push(String::new());
        lines.push(format!("## {}", post.title));
        lines.push(post.content.clone());
        for comment in &post.comments {
            lines.push(format!("  - {comment}"));
        }
    }
}
