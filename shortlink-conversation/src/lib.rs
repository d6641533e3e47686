//! # shortlink-conversation
//!
//! The conversation layer of the link bot: per-user state machine, input sanitization,
//! control-label matching, reply rendering with chunking, and the handlers that plug into
//! the [`shortlink_core::HandlerChain`].

mod controls;
mod engine;
mod handler;
mod logging;
mod render;
mod state;

pub use controls::{
    is_cancel_control, is_create_control, is_get_link_control, sanitize_handle,
    CANCEL_COMMAND, CANCEL_LABEL, CREATE_LINK_LABEL, GET_LINK_LABEL, OPEN_LINK_LABEL,
    START_COMMAND,
};
pub use engine::ConversationEngine;
pub use handler::ConversationHandler;
pub use logging::LoggingHandler;
pub use render::{render_outcome, split_chunks, MAX_REPLY_CHARS};
pub use state::{ConversationState, ConversationStore};
