use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Notification message to be sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Message title
    pub title: String,
    /// Message content/body
    pub content: String,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Notification sender trait (Strategy pattern)
///
/// Delivery is best-effort: implementations log their own failures and
/// report `None` instead of returning an error.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send a notification message, returning the gateway's response body
    async fn send(&self, message: &NotificationMessage) -> Option<String>;
}
