//! The conversation state machine.
//!
//! [`ConversationEngine::handle_text`] takes one inbound text and returns the ordered
//! outbound replies for that turn; sending them is the caller's job. The remote generation
//! call happens inside the terminal turn, so a turn is complete only once its replies are
//! returned.

use crate::controls::{
    is_cancel_control, is_create_control, is_get_link_control, sanitize_handle, CANCEL_COMMAND,
    CANCEL_LABEL, CREATE_LINK_LABEL, GET_LINK_LABEL, START_COMMAND,
};
use crate::render::render_outcome;
use crate::state::{ConversationState, ConversationStore};
use shortlink_client::{GenerationRequest, LinkGenerator};
use shortlink_core::Reply;
use std::sync::Arc;
use tracing::{info, warn};

const MSG_WELCOME: &str = "Welcome! Press 'Create Link 🔗' to start generating a link.";
const MSG_ASK_USERNAME: &str = "Please send your Telegram username.";
const MSG_ASK_MESSAGE: &str = "Got it! Now, please send your message (optional). Or click 'Get Link 🔗' to create the link without a message.";
const MSG_CANCELLED: &str = "Conversation cancelled. No link was generated.";
const MSG_CREATE_AGAIN: &str = "Press 'Create Link 🔗' to generate another link.";

/// Per-user conversational state machine in front of a [`LinkGenerator`].
pub struct ConversationEngine {
    store: ConversationStore,
    generator: Arc<dyn LinkGenerator>,
}

impl ConversationEngine {
    pub fn new(generator: Arc<dyn LinkGenerator>) -> Self {
        Self {
            store: ConversationStore::new(),
            generator,
        }
    }

    /// Current state of a user's conversation; `None` means idle.
    pub async fn state_of(&self, user_id: i64) -> Option<ConversationState> {
        self.store.get(user_id).await
    }

    /// Processes one inbound text for `user_id` and returns the replies to send, in order.
    pub async fn handle_text(&self, user_id: i64, text: &str) -> Vec<Reply> {
        if text.trim() == CANCEL_COMMAND {
            return self.cancel(user_id).await;
        }

        let state = self.store.get(user_id).await;

        // Inside an active conversation, /start is absorbed: command text is never taken
        // as a handle or message.
        if state.is_some() && text.trim() == START_COMMAND {
            info!(user_id, "Start command during active conversation, ignoring");
            return Vec::new();
        }

        match state {
            None => self.handle_idle(user_id, text).await,
            Some(ConversationState::AwaitingHandle) => {
                self.handle_awaiting_handle(user_id, text).await
            }
            Some(ConversationState::AwaitingMessage { handle }) => {
                self.handle_awaiting_message(user_id, &handle, text).await
            }
        }
    }

    /// Idle: the create control opens a conversation; `/start` and any other text re-show
    /// the entry prompt. The dual entry point is a deliberate rule, not transport wiring.
    async fn handle_idle(&self, user_id: i64, text: &str) -> Vec<Reply> {
        if is_create_control(text) {
            info!(user_id, "Conversation started, awaiting handle");
            self.store.set(user_id, ConversationState::AwaitingHandle).await;
            return vec![Reply::with_keyboard(MSG_ASK_USERNAME, cancel_keyboard())];
        }

        if text.trim() != START_COMMAND {
            info!(user_id, "Free text while idle, showing entry prompt");
        }
        vec![Reply::with_keyboard(MSG_WELCOME, entry_keyboard())]
    }

    async fn handle_awaiting_handle(&self, user_id: i64, text: &str) -> Vec<Reply> {
        if is_cancel_control(text) {
            return self.cancel(user_id).await;
        }

        match sanitize_handle(text) {
            Some(handle) => {
                info!(user_id, handle = %handle, "Handle accepted, awaiting message");
                self.store
                    .set(user_id, ConversationState::AwaitingMessage { handle })
                    .await;
                vec![Reply::with_keyboard(MSG_ASK_MESSAGE, message_keyboard())]
            }
            None => {
                info!(user_id, "Empty handle after sanitization, re-prompting");
                vec![Reply::with_keyboard(MSG_ASK_USERNAME, cancel_keyboard())]
            }
        }
    }

    async fn handle_awaiting_message(&self, user_id: i64, handle: &str, text: &str) -> Vec<Reply> {
        if is_cancel_control(text) {
            return self.cancel(user_id).await;
        }

        let message = if is_get_link_control(text) { "" } else { text };
        self.finish_with_generation(user_id, handle, message).await
    }

    /// Terminal turn: call the generator, reset to idle, render the outcome, re-show the
    /// entry prompt. Generation failures become replies, never errors.
    async fn finish_with_generation(
        &self,
        user_id: i64,
        handle: &str,
        message: &str,
    ) -> Vec<Reply> {
        let request = GenerationRequest::new(handle, message);
        info!(
            user_id,
            handle = %request.handle,
            message_len = request.message.len(),
            "Submitting generation request"
        );

        let outcome = self.generator.generate(&request).await;
        if let Err(e) = &outcome {
            warn!(user_id, error = %e, "Link generation failed");
        }

        self.store.clear(user_id).await;

        let mut replies = render_outcome(&outcome);
        replies.push(entry_prompt());
        replies
    }

    /// Cancel flow: accepted in any state, idempotent. From an active conversation the
    /// cancellation notice precedes the entry prompt; from idle only the entry prompt is
    /// shown.
    async fn cancel(&self, user_id: i64) -> Vec<Reply> {
        let was_active = self.store.get(user_id).await.is_some();
        self.store.clear(user_id).await;

        if was_active {
            info!(user_id, "Conversation cancelled");
            vec![Reply::text(MSG_CANCELLED), entry_prompt()]
        } else {
            vec![entry_prompt()]
        }
    }
}

fn entry_keyboard() -> Vec<Vec<String>> {
    vec![vec![CREATE_LINK_LABEL.to_string()]]
}

fn cancel_keyboard() -> Vec<Vec<String>> {
    vec![vec![CANCEL_LABEL.to_string()]]
}

fn message_keyboard() -> Vec<Vec<String>> {
    vec![vec![CANCEL_LABEL.to_string(), GET_LINK_LABEL.to_string()]]
}

fn entry_prompt() -> Reply {
    Reply::with_keyboard(MSG_CREATE_AGAIN, entry_keyboard())
}
