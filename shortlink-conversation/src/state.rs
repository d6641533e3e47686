//! Per-user conversation state.
//!
//! A user with no entry in the store is idle. The pending handle lives inside
//! [`ConversationState::AwaitingMessage`], so it exists exactly while a message is awaited.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Where a user's conversation currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversationState {
    /// The bot asked for the recipient handle.
    AwaitingHandle,
    /// The handle was accepted; the bot asked for the optional message.
    AwaitingMessage { handle: String },
}

/// Map from user id to that user's conversation state. One entry per user at most; entries
/// are removed on every terminal outcome (link delivered, failure, or cancellation).
#[derive(Clone, Default)]
pub struct ConversationStore {
    states: Arc<RwLock<HashMap<i64, ConversationState>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            states: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn set(&self, user_id: i64, state: ConversationState) {
        self.states.write().await.insert(user_id, state);
    }

    pub async fn get(&self, user_id: i64) -> Option<ConversationState> {
        self.states.read().await.get(&user_id).cloned()
    }

    pub async fn clear(&self, user_id: i64) {
        self.states.write().await.remove(&user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_entry_means_idle() {
        let store = ConversationStore::new();
        assert_eq!(store.get(1).await, None);
    }

    #[tokio::test]
    async fn set_get_clear_round_trip() {
        let store = ConversationStore::new();
        store.set(1, ConversationState::AwaitingHandle).await;
        assert_eq!(store.get(1).await, Some(ConversationState::AwaitingHandle));

        store
            .set(
                1,
                ConversationState::AwaitingMessage {
                    handle: "alice".to_string(),
                },
            )
            .await;
        assert_eq!(
            store.get(1).await,
            Some(ConversationState::AwaitingMessage {
                handle: "alice".to_string()
            })
        );

        store.clear(1).await;
        assert_eq!(store.get(1).await, None);
    }

    #[tokio::test]
    async fn users_do_not_share_state() {
        let store = ConversationStore::new();
        store.set(1, ConversationState::AwaitingHandle).await;
        assert_eq!(store.get(2).await, None);
    }
}
