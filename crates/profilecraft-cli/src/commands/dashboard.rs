//! Scripted dashboard session.
//!
//! Loads the demo draft, applies a handful of edits, shows the navigation
//! guard rejecting and then allowing a tab change, and saves. Useful for
//! eyeballing the engine without a frontend.

use std::sync::Arc;

use anyhow::Result;

use profilecraft_application::{notification, DashboardUseCase, SaveOutcome};
use profilecraft_core::session::{DashboardTab, NavDecision, NavOutcome};
use profilecraft_infrastructure::{ConfigService, DemoPortfolioRepository};

pub async fn run(username: &str) -> Result<()> {
    let config = ConfigService::new().get_config();
    let (tx, mut rx) = notification::channel();
    let mut dashboard = DashboardUseCase::new(
        Arc::new(DemoPortfolioRepository::new(config.load_delay())),
        tx,
        config.save_delay(),
    );

    dashboard.load(username).await?;
    println!("loaded draft for {username} ({} skills, {} projects)",
        dashboard.portfolio().skills.len(),
        dashboard.portfolio().projects.len());

    dashboard.navigate(DashboardTab::Skills, || NavDecision::Confirm);
    let skill = dashboard.add_skill();
    dashboard.update_skill(&skill, |s| {
        s.name = "Rust".to_string();
        s.set_level(80);
    });
    println!("added skill {skill}; session dirty: {}", dashboard.session().is_dirty());

    match dashboard.navigate(DashboardTab::Projects, || NavDecision::Decline) {
        NavOutcome::Stayed => println!("navigation declined, staying on {}", dashboard.current_tab()),
        NavOutcome::Navigated(tab) => println!("navigated to {tab}"),
    }

    match dashboard.save().await {
        SaveOutcome::Saved => {
            if let Ok(note) = rx.try_recv() {
                println!("{}: {}", note.title, note.description);
            }
        }
        SaveOutcome::NoChanges => println!("nothing to save"),
    }

    let outcome = dashboard.navigate(DashboardTab::Projects, || NavDecision::Decline);
    println!("after save, navigation outcome: {outcome:?}");

    Ok(())
}
