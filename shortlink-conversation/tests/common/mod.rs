pub mod mock_bot;
pub mod mock_generator;

use chrono::Utc;
use shortlink_core::{Chat, Message, MessageDirection, User};

/// Builds an inbound text message for the given user and chat.
pub fn inbound(user_id: i64, chat_id: i64, text: &str) -> Message {
    Message {
        id: format!("msg-{}", text.len()),
        user: User {
            id: user_id,
            username: Some("tester".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: text.to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}
