//! Portfolio aggregate model.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::profile::Profile;
use crate::project::Project;
use crate::resume::{EducationEntry, ExperienceEntry};
use crate::settings::SiteSettings;
use crate::skill::Skill;

/// Everything one user's portfolio draft holds.
///
/// Each collection is owned exclusively by its dashboard sub-editor; there
/// are no cross-collection references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Collection<Skill>,
    pub experience: Collection<ExperienceEntry>,
    pub education: Collection<EducationEntry>,
    pub projects: Collection<Project>,
    pub settings: SiteSettings,
}
