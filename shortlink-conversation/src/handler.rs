//! Chain handler that drives the conversation engine.
//!
//! Inbound messages are queued per user and processed serially: one user's turn — including
//! the remote generation call — fully completes before their next message is taken, while
//! distinct users' queues run concurrently.

use crate::engine::ConversationEngine;
use async_trait::async_trait;
use shortlink_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// One item in a per-user queue.
type QueuedItem = Message;
/// Sender to a per-user processing queue.
type QueueSender = mpsc::UnboundedSender<QueuedItem>;

/// Handler that owns the per-user queues and sends the engine's replies through the bot.
pub struct ConversationHandler {
    engine: Arc<ConversationEngine>,
    bot: Arc<dyn Bot>,
    queues: dashmap::DashMap<i64, QueueSender>,
}

impl ConversationHandler {
    pub fn new(engine: Arc<ConversationEngine>, bot: Arc<dyn Bot>) -> Self {
        Self {
            engine,
            bot,
            queues: dashmap::DashMap::new(),
        }
    }

    fn get_or_create_queue(&self, user_id: i64) -> QueueSender {
        let (tx, rx) = mpsc::unbounded_channel::<QueuedItem>();
        let engine = self.engine.clone();
        let bot = self.bot.clone();
        tokio::spawn(Self::process_queue_loop(rx, engine, bot, user_id));
        tx
    }

    /// Consumes one user's queue serially: run the engine turn, then send every reply.
    async fn process_queue_loop(
        mut rx: mpsc::UnboundedReceiver<QueuedItem>,
        engine: Arc<ConversationEngine>,
        bot: Arc<dyn Bot>,
        user_id: i64,
    ) {
        while let Some(message) = rx.recv().await {
            info!(user_id, message_id = %message.id, "Processing queued message");
            let replies = engine.handle_text(user_id, &message.content).await;
            for reply in &replies {
                if let Err(e) = bot.send_reply(&message.chat, reply).await {
                    error!(error = %e, user_id, "Failed to send reply");
                }
            }
        }
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content.is_empty() {
            info!(user_id = message.user.id, "Empty content, skipping");
            return Ok(HandlerResponse::Continue);
        }

        let user_id = message.user.id;
        let tx = self
            .queues
            .entry(user_id)
            .or_insert_with(|| self.get_or_create_queue(user_id))
            .clone();

        if tx.send(message.clone()).is_err() {
            error!(user_id, "Failed to queue message (receiver dropped)");
            return Ok(HandlerResponse::Stop);
        }

        Ok(HandlerResponse::Stop)
    }
}
