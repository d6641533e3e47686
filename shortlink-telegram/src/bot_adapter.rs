//! Wraps teloxide::Bot and implements [`shortlink_core::Bot`]. Production code sends
//! messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use shortlink_core::{Bot as CoreBot, Chat, Message, ReplyMarkup, Result, ShortlinkError};
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardButtonKind, InlineKeyboardMarkup, KeyboardButton,
    KeyboardMarkup,
};
use tracing::warn;

/// Thin wrapper around teloxide::Bot that implements shortlink-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Converts core markup to the teloxide representation. Returns `None` when the inline
/// button URL does not parse; the caller falls back to a plain text send.
fn to_teloxide_markup(markup: &ReplyMarkup) -> Option<teloxide::types::ReplyMarkup> {
    match markup {
        ReplyMarkup::Keyboard(rows) => {
            let keyboard: Vec<Vec<KeyboardButton>> = rows
                .iter()
                .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect())
                .collect();
            let kb = KeyboardMarkup::new(keyboard)
                .one_time_keyboard()
                .resize_keyboard();
            Some(teloxide::types::ReplyMarkup::Keyboard(kb))
        }
        ReplyMarkup::InlineUrl { label, url } => {
            let parsed: reqwest::Url = url.parse().ok()?;
            let button = InlineKeyboardButton::new(
                label.clone(),
                InlineKeyboardButtonKind::Url(parsed),
            );
            Some(teloxide::types::ReplyMarkup::InlineKeyboard(
                InlineKeyboardMarkup::new(vec![vec![button]]),
            ))
        }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| ShortlinkError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_message_with_markup(
        &self,
        chat: &Chat,
        text: &str,
        markup: &ReplyMarkup,
    ) -> Result<()> {
        match to_teloxide_markup(markup) {
            Some(tg_markup) => {
                let mut req = self.bot.send_message(ChatId(chat.id), text.to_string());
                req.reply_markup = Some(tg_markup);
                req.await.map_err(|e| ShortlinkError::Bot(e.to_string()))?;
                Ok(())
            }
            None => {
                warn!(chat_id = chat.id, "Unusable markup (bad URL), sending plain text");
                self.send_message(chat, text).await
            }
        }
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
