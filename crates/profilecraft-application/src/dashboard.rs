//! Dashboard use case.
//!
//! Coordinates the editing session, the per-tab collection editors, and the
//! navigation guard. Every mutation funnels through a single `touch` entry
//! point, so the dirty flag has exactly one writer and sibling editors never
//! share ambient mutable state.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use profilecraft_core::collection::{IdGenerator, Record, RecordId};
use profilecraft_core::portfolio::{Portfolio, PortfolioRepository};
use profilecraft_core::profile::Profile;
use profilecraft_core::project::Project;
use profilecraft_core::resume::{EducationEntry, ExperienceEntry};
use profilecraft_core::session::{DashboardTab, EditSession, NavDecision, NavOutcome};
use profilecraft_core::settings::SiteSettings;
use profilecraft_core::skill::Skill;
use profilecraft_core::Result;

use crate::notification::{Notification, NotificationSender};

/// Result of a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveOutcome {
    /// The draft was saved and the session is clean again.
    Saved,
    /// Nothing was dirty; the save trigger is disabled in this state.
    NoChanges,
}

/// Use case driving one dashboard visit.
///
/// Owns the portfolio draft, the edit session, and the current tab. The
/// session's dirty flag gates both navigation (via the guard) and saving.
pub struct DashboardUseCase {
    /// Read source for portfolio data.
    repository: Arc<dyn PortfolioRepository>,
    /// Channel for user-visible notifications.
    notifications: NotificationSender,
    /// Simulated persistence latency applied by `save`.
    save_delay: Duration,
    session: EditSession,
    current_tab: DashboardTab,
    portfolio: Portfolio,
    ids: IdGenerator,
}

impl DashboardUseCase {
    pub fn new(
        repository: Arc<dyn PortfolioRepository>,
        notifications: NotificationSender,
        save_delay: Duration,
    ) -> Self {
        Self {
            repository,
            notifications,
            save_delay,
            session: EditSession::new(),
            current_tab: DashboardTab::default(),
            portfolio: Portfolio::default(),
            ids: IdGenerator::new(),
        }
    }

    /// Loads the portfolio draft and resets the session to clean.
    pub async fn load(&mut self, username: &str) -> Result<()> {
        self.portfolio = self.repository.load(username).await?;
        self.session.reset();
        info!(username, "portfolio draft loaded");
        Ok(())
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn current_tab(&self) -> DashboardTab {
        self.current_tab
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Marks the session dirty when an edit actually changed something.
    fn touch(&mut self, changed: bool) -> bool {
        if changed {
            self.session.mark_dirty();
        }
        changed
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Attempts to switch tabs, consulting `prompt` only when dirty.
    pub fn navigate(
        &mut self,
        target: DashboardTab,
        prompt: impl FnOnce() -> NavDecision,
    ) -> NavOutcome {
        let outcome = self.session.request_navigate(target, prompt);
        if let NavOutcome::Navigated(tab) = outcome {
            debug!(from = %self.current_tab, to = %tab, "tab change");
            self.current_tab = tab;
        }
        outcome
    }

    /// Attempts to navigate to a raw route path.
    pub fn navigate_path(
        &mut self,
        path: &str,
        prompt: impl FnOnce() -> NavDecision,
    ) -> NavOutcome {
        self.navigate(DashboardTab::from_path(path), prompt)
    }

    // ------------------------------------------------------------------
    // Saving
    // ------------------------------------------------------------------

    /// Saves the draft after the configured simulated delay.
    ///
    /// A clean session is a no-op; the trigger is disabled in the UI while
    /// clean, and the `&mut self` receiver keeps a second save from starting
    /// while one is in flight.
    pub async fn save(&mut self) -> SaveOutcome {
        if !self.session.is_dirty() {
            return SaveOutcome::NoChanges;
        }
        tokio::time::sleep(self.save_delay).await;
        self.session.reset();
        let _ = self.notifications.send(Notification::saved());
        info!(session_id = %self.session.id(), "portfolio saved");
        SaveOutcome::Saved
    }

    // ------------------------------------------------------------------
    // Profile & settings editors (single-record tabs)
    // ------------------------------------------------------------------

    /// Applies a field edit to the profile and marks the session dirty.
    pub fn edit_profile(&mut self, edit: impl FnOnce(&mut Profile)) {
        edit(&mut self.portfolio.profile);
        self.session.mark_dirty();
    }

    /// Applies a field edit to the site settings and marks the session dirty.
    pub fn edit_settings(&mut self, edit: impl FnOnce(&mut SiteSettings)) {
        edit(&mut self.portfolio.settings);
        self.session.mark_dirty();
    }

    // ------------------------------------------------------------------
    // Skills editor
    // ------------------------------------------------------------------

    /// Appends a draft skill and returns its id.
    pub fn add_skill(&mut self) -> RecordId {
        let id = self.portfolio.skills.push_draft(&mut self.ids).id().clone();
        self.session.mark_dirty();
        id
    }

    pub fn update_skill(&mut self, id: &RecordId, edit: impl FnOnce(&mut Skill)) -> bool {
        let changed = self.portfolio.skills.update(id, edit);
        self.touch(changed)
    }

    pub fn remove_skill(&mut self, id: &RecordId) -> bool {
        let changed = self.portfolio.skills.remove(id);
        self.touch(changed)
    }

    // ------------------------------------------------------------------
    // Projects editor
    // ------------------------------------------------------------------

    /// Appends a draft project and returns its id.
    pub fn add_project(&mut self) -> RecordId {
        let id = self
            .portfolio
            .projects
            .push_draft(&mut self.ids)
            .id()
            .clone();
        self.session.mark_dirty();
        id
    }

    pub fn update_project(&mut self, id: &RecordId, edit: impl FnOnce(&mut Project)) -> bool {
        let changed = self.portfolio.projects.update(id, edit);
        self.touch(changed)
    }

    pub fn remove_project(&mut self, id: &RecordId) -> bool {
        let changed = self.portfolio.projects.remove(id);
        self.touch(changed)
    }

    /// Appends a trimmed, non-empty tag to a project.
    pub fn add_project_tag(&mut self, id: &RecordId, tag: &str) -> bool {
        let mut added = false;
        self.portfolio.projects.update(id, |p| {
            added = p.add_tag(tag);
        });
        self.touch(added)
    }

    /// Removes every occurrence of an exact tag from a project.
    pub fn remove_project_tag(&mut self, id: &RecordId, tag: &str) -> bool {
        let mut removed = false;
        self.portfolio.projects.update(id, |p| {
            removed = p.remove_tag(tag);
        });
        self.touch(removed)
    }

    // ------------------------------------------------------------------
    // Resume editor (experience + education)
    // ------------------------------------------------------------------

    /// Appends a draft experience entry and returns its id.
    pub fn add_experience(&mut self) -> RecordId {
        let id = self
            .portfolio
            .experience
            .push_draft(&mut self.ids)
            .id()
            .clone();
        self.session.mark_dirty();
        id
    }

    pub fn update_experience(
        &mut self,
        id: &RecordId,
        edit: impl FnOnce(&mut ExperienceEntry),
    ) -> bool {
        let changed = self.portfolio.experience.update(id, edit);
        self.touch(changed)
    }

    pub fn remove_experience(&mut self, id: &RecordId) -> bool {
        let changed = self.portfolio.experience.remove(id);
        self.touch(changed)
    }

    /// Appends a draft education entry and returns its id.
    pub fn add_education(&mut self) -> RecordId {
        let id = self
            .portfolio
            .education
            .push_draft(&mut self.ids)
            .id()
            .clone();
        self.session.mark_dirty();
        id
    }

    pub fn update_education(
        &mut self,
        id: &RecordId,
        edit: impl FnOnce(&mut EducationEntry),
    ) -> bool {
        let changed = self.portfolio.education.update(id, edit);
        self.touch(changed)
    }

    pub fn remove_education(&mut self, id: &RecordId) -> bool {
        let changed = self.portfolio.education.remove(id);
        self.touch(changed)
    }
}
