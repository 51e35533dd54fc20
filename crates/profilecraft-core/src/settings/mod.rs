//! Site settings domain models.

mod model;

pub use model::SiteSettings;
