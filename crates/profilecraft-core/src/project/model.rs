//! Project domain model.

use serde::{Deserialize, Serialize};

use crate::collection::{Record, RecordId};

/// A showcased project with free-form fields and an ordered tag list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: RecordId,
    pub title: String,
    pub description: String,
    /// Technology tags, in the order the user added them. Duplicates are
    /// allowed; the public gallery collapses them when listing filters.
    pub tags: Vec<String>,
    /// Cover image URL, empty when none is set.
    pub image: String,
    /// External project link, empty when none is set.
    pub link: String,
}

impl Project {
    /// Creates a project with an explicit id.
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        image: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tags,
            image: image.into(),
            link: link.into(),
        }
    }

    /// Appends a tag after trimming whitespace.
    ///
    /// A tag that is empty after trimming is rejected. Duplicates are kept
    /// as-is. Returns `true` if a tag was appended.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.tags.push(trimmed.to_string());
        true
    }

    /// Removes every occurrence of an exact tag string.
    ///
    /// Returns `true` if at least one tag was removed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}

impl Record for Project {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn draft(id: RecordId) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            tags: Vec::new(),
            image: String::new(),
            link: String::new(),
        }
    }
}
