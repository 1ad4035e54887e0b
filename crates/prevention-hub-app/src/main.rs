#![warn(missing_docs)]
//! # prevention-hub-app binary
//!
//! Demo shell that renders one hub page as plain text.

use prevention_hub_app::render::render_page;
use prevention_hub_app::{AppConfig, app_version, init_engine, init_tracing};
use prevention_hub_ui::{Page, SessionContext};
use time::OffsetDateTime;
use tracing::{error, info};

/// CLI entry point.
fn main() {
    init_tracing();

    let config = AppConfig::from_env();
    info!(version = app_version(), "prevention-hub starting");

    let page = match std::env::args().nth(1) {
        Some(label) => match label.parse::<Page>() {
            Ok(page) => page,
            Err(parse_error) => {
                error!(error = %parse_error, "cannot render page");
                let menu: Vec<&str> = Page::ALL.iter().map(|page| page.title()).collect();
                eprintln!("{parse_error}; expected one of: {}", menu.join(", "));
                std::process::exit(2);
            }
        },
        None => Page::RiskAssessment,
    };

    let engine = init_engine(&config);
    let mut session = SessionContext::new(config.user_id.clone());
    session.navigate(page);

    let today = OffsetDateTime::now_utc().date();
    println!("{}", render_page(session.page(), &mut session, engine, today));
}
