//! Resume entry models.
//!
//! Experience and education are separate ordered collections on the resume
//! tab; both are plain free-form text records.

use serde::{Deserialize, Serialize};

use crate::collection::{Record, RecordId};

/// One work-experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    id: RecordId,
    pub title: String,
    pub company: String,
    /// Free-form range such as "2021 - Present".
    pub period: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        company: impl Into<String>,
        period: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            period: period.into(),
            description: description.into(),
        }
    }
}

impl Record for ExperienceEntry {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn draft(id: RecordId) -> Self {
        Self {
            id,
            title: String::new(),
            company: String::new(),
            period: String::new(),
            description: String::new(),
        }
    }
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    id: RecordId,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

impl EducationEntry {
    pub fn new(
        id: impl Into<RecordId>,
        degree: impl Into<String>,
        institution: impl Into<String>,
        period: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            degree: degree.into(),
            institution: institution.into(),
            period: period.into(),
            description: description.into(),
        }
    }
}

impl Record for EducationEntry {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn draft(id: RecordId) -> Self {
        Self {
            id,
            degree: String::new(),
            institution: String::new(),
            period: String::new(),
            description: String::new(),
        }
    }
}
