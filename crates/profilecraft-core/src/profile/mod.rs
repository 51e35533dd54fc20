//! Profile domain models.

mod model;

pub use model::{Profile, SocialLinks};
