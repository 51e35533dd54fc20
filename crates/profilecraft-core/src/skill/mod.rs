//! Skill domain models.

mod model;

pub use model::{Skill, DEFAULT_SKILL_LEVEL};
