//! Skill domain model.

use serde::{Deserialize, Serialize};

use crate::collection::{Record, RecordId};

/// Proficiency level assigned to a freshly added skill.
pub const DEFAULT_SKILL_LEVEL: u8 = 50;

/// A single named skill with a 0-100 proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    id: RecordId,
    /// Display name (e.g., "JavaScript").
    pub name: String,
    /// Proficiency level, always within 0..=100.
    level: u8,
}

impl Skill {
    /// Creates a skill with an explicit id, clamping the level into range.
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: level.min(100),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Sets the proficiency level, clamping into 0..=100.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }
}

impl Record for Skill {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn draft(id: RecordId) -> Self {
        Self {
            id,
            name: String::new(),
            level: DEFAULT_SKILL_LEVEL,
        }
    }
}
