//! Project domain models and derived public views.

mod model;
mod view;

pub use model::Project;
pub use view::{available_tags, visible_projects};
