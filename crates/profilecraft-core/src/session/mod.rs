//! Editing session domain module.
//!
//! Contains the edit session model with its dirty flag, the navigation
//! guard that gates tab changes on unsaved edits, and the dashboard tab
//! routing surface.
//!
//! - `model`: `EditSession` and its `Clean`/`Dirty` state
//! - `guard`: navigation decision types and the guarded-navigate logic
//! - `tab`: dashboard tab identifiers and path mapping

mod guard;
mod model;
mod tab;

pub use guard::{NavDecision, NavOutcome};
pub use model::{EditSession, EditState};
pub use tab::DashboardTab;
