//! Domain layer for ProfileCraft.
//!
//! Pure, headless models for the portfolio builder: editable records and
//! their ordered collections, the editing session with its navigation
//! guard, template styling, and the derived public views. No persistence
//! and no I/O live here.

pub mod collection;
pub mod error;
pub mod portfolio;
pub mod profile;
pub mod project;
pub mod resume;
pub mod session;
pub mod settings;
pub mod skill;
pub mod template;

// Re-export common error type
pub use error::{CraftError, Result};
