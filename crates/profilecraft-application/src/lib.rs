//! Application layer for ProfileCraft.
//!
//! This crate provides the use case implementations that coordinate the
//! domain layer into dashboard-level behavior: guarded navigation, the
//! per-tab editors, and the simulated save path with notifications.

pub mod dashboard;
pub mod notification;

pub use dashboard::{DashboardUseCase, SaveOutcome};
pub use notification::{Notification, NotificationSender};
