//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in shortlink-telegram.
//! Tests substitute recording mocks.

use crate::error::Result;
use crate::types::{Chat, Message, Reply, ReplyMarkup};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text message with markup (reply keyboard or inline URL button).
    async fn send_message_with_markup(
        &self,
        chat: &Chat,
        text: &str,
        markup: &ReplyMarkup,
    ) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;

    /// Sends one [`Reply`], dispatching on whether markup is attached.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        match &reply.markup {
            Some(markup) => self.send_message_with_markup(chat, &reply.text, markup).await,
            None => self.send_message(chat, &reply.text).await,
        }
    }
}
