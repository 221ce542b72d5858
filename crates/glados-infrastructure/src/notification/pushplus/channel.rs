use async_trait::async_trait;
use std::sync::Arc;

use glados_domain::notification::{NotificationMessage, NotificationSender};

use super::NotificationDispatcher;

/// PushPlus channel bound to one gateway token
pub struct PushPlusChannel {
    token: String,
    dispatcher: Arc<NotificationDispatcher>,
}

impl PushPlusChannel {
    pub fn new(token: impl Into<String>, dispatcher: Arc<NotificationDispatcher>) -> Self {
        Self {
            token: token.into(),
            dispatcher,
        }
    }
}

#[async_trait]
impl NotificationSender for PushPlusChannel {
    async fn send(&self, message: &NotificationMessage) -> Option<String> {
        self.dispatcher
            .send(&self.token, &message.title, &message.content)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_channel_returns_none() {
        let dispatcher = Arc::new(NotificationDispatcher::new().unwrap());
        let channel = PushPlusChannel::new("", dispatcher);

        let message = NotificationMessage::new("title", "content");
        assert_eq!(channel.send(&message).await, None);
    }
}
