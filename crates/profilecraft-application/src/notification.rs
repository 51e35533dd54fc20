//! User-visible transient notifications.
//!
//! Notifications are pushed over an unbounded channel so the presenting
//! surface (desktop shell, CLI, test harness) can render them however it
//! likes without the use case blocking on it.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// A transient toast-style notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    /// The fixed notification emitted after a successful save.
    pub fn saved() -> Self {
        Self {
            title: "Changes saved successfully".to_string(),
            description: "Your portfolio has been updated.".to_string(),
        }
    }
}

/// Sending half handed to the dashboard use case.
pub type NotificationSender = mpsc::UnboundedSender<Notification>;

/// Creates the notification channel.
pub fn channel() -> (NotificationSender, mpsc::UnboundedReceiver<Notification>) {
    mpsc::unbounded_channel()
}
