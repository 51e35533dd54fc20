//! Edit session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether the session carries unsaved edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditState {
    /// No edits since the last load or save.
    #[default]
    Clean,
    /// At least one unsaved edit exists.
    Dirty,
}

/// The editing context for one dashboard visit.
///
/// Created on entering the dashboard and never persisted. The dirty flag is
/// the single source of truth for the navigation guard: it is set through
/// `mark_dirty` alone and cleared only by a confirmed navigation or a
/// completed save (both via `reset`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSession {
    /// Unique session identifier.
    id: Uuid,
    /// When the dashboard visit began.
    started_at: DateTime<Utc>,
    state: EditState,
}

impl EditSession {
    /// Starts a clean session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            state: EditState::Clean,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == EditState::Dirty
    }

    /// Records that an unsaved edit exists. Idempotent.
    pub fn mark_dirty(&mut self) {
        self.state = EditState::Dirty;
    }

    /// Returns the session to `Clean` after a load, save, or confirmed
    /// navigation.
    pub fn reset(&mut self) {
        self.state = EditState::Clean;
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_clean() {
        let session = EditSession::new();
        assert_eq!(session.state(), EditState::Clean);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_mark_dirty_is_idempotent() {
        let mut session = EditSession::new();
        session.mark_dirty();
        session.mark_dirty();
        session.mark_dirty();
        assert!(session.is_dirty());

        session.reset();
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(EditSession::new().id(), EditSession::new().id());
    }
}
