//! Navigation guard over the edit session.
//!
//! Tab changes are the sole cross-section interface and every one of them
//! goes through `request_navigate`. The confirmation is a synchronous
//! decision callback rather than a blocking dialog, so the guard is fully
//! testable headlessly; the callback is consulted only when the session is
//! dirty.

use serde::{Deserialize, Serialize};

use super::model::EditSession;
use super::tab::DashboardTab;

/// The user's answer to the unsaved-changes confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDecision {
    /// Discard unsaved edits and leave.
    Confirm,
    /// Stay on the current tab.
    Decline,
}

/// Result of a guarded navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "lowercase")]
pub enum NavOutcome {
    /// The navigation went through to the target tab.
    Navigated(DashboardTab),
    /// The user declined the prompt; the current tab is unchanged.
    Stayed,
}

impl EditSession {
    /// Attempts to navigate to `target`.
    ///
    /// A clean session navigates immediately without consulting the prompt.
    /// A dirty session asks: on `Confirm` the session resets to clean and
    /// the navigation goes through; on `Decline` nothing changes and the
    /// session stays dirty.
    pub fn request_navigate(
        &mut self,
        target: DashboardTab,
        prompt: impl FnOnce() -> NavDecision,
    ) -> NavOutcome {
        if !self.is_dirty() {
            return NavOutcome::Navigated(target);
        }
        match prompt() {
            NavDecision::Confirm => {
                self.reset();
                NavOutcome::Navigated(target)
            }
            NavDecision::Decline => NavOutcome::Stayed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_session_navigates_without_prompting() {
        let mut session = EditSession::new();
        let outcome = session.request_navigate(DashboardTab::Skills, || {
            panic!("prompt must not be consulted while clean")
        });
        assert_eq!(outcome, NavOutcome::Navigated(DashboardTab::Skills));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_dirty_confirm_resets_and_navigates() {
        let mut session = EditSession::new();
        session.mark_dirty();

        let outcome = session.request_navigate(DashboardTab::Projects, || NavDecision::Confirm);
        assert_eq!(outcome, NavOutcome::Navigated(DashboardTab::Projects));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_dirty_decline_stays_and_keeps_dirty() {
        let mut session = EditSession::new();
        session.mark_dirty();

        let outcome = session.request_navigate(DashboardTab::Settings, || NavDecision::Decline);
        assert_eq!(outcome, NavOutcome::Stayed);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_decline_is_a_self_loop() {
        let mut session = EditSession::new();
        session.mark_dirty();

        for _ in 0..3 {
            let outcome = session.request_navigate(DashboardTab::Resume, || NavDecision::Decline);
            assert_eq!(outcome, NavOutcome::Stayed);
            assert!(session.is_dirty());
        }

        let outcome = session.request_navigate(DashboardTab::Resume, || NavDecision::Confirm);
        assert_eq!(outcome, NavOutcome::Navigated(DashboardTab::Resume));
    }
}
