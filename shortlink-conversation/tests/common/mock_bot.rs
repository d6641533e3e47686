//! Mock implementation of [`shortlink_core::Bot`] for integration tests.
//!
//! Records every send so tests can wait for replies and assert on text and markup without
//! hitting Telegram.

use async_trait::async_trait;
use shortlink_core::{Bot, Chat, Message, ReplyMarkup, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One recorded outbound send.
#[derive(Debug, Clone)]
pub struct SendRecord {
    pub chat_id: i64,
    pub text: String,
    pub markup: Option<ReplyMarkup>,
}

/// Mock Bot that forwards every send as a [`SendRecord`]; the receiver is held by the test.
pub struct MockBot {
    send_tx: mpsc::UnboundedSender<SendRecord>,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for send records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SendRecord>) {
        let (send_tx, send_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { send_tx }), send_rx)
    }

    fn record(&self, chat: &Chat, text: &str, markup: Option<ReplyMarkup>) {
        let _ = self.send_tx.send(SendRecord {
            chat_id: chat.id,
            text: text.to_string(),
            markup,
        });
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, text, None);
        Ok(())
    }

    async fn send_message_with_markup(
        &self,
        chat: &Chat,
        text: &str,
        markup: &ReplyMarkup,
    ) -> Result<()> {
        self.record(chat, text, Some(markup.clone()));
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(&message.chat, text, None);
        Ok(())
    }
}
