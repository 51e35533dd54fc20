//! Resume domain models (work experience and education).

mod model;

pub use model::{EducationEntry, ExperienceEntry};
