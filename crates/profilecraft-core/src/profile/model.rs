//! Profile domain model.
//!
//! The profile tab edits a single record rather than a collection; every
//! field is free-form text shown on the public about section.

use serde::{Deserialize, Serialize};

/// Social profile links shown as icons on the public page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub dribbble: String,
}

/// The portfolio owner's personal information.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// Professional headline (e.g., "Full Stack Developer").
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    /// Biography; blank-line separated paragraphs.
    pub about: String,
    pub social_links: SocialLinks,
    /// Profile image URL, empty when none is set.
    pub profile_image: String,
}
