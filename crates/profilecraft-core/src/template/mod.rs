//! Portfolio template identifiers and their presentational style bundles.

mod model;

pub use model::{Template, TemplateStyles};
