//! Scripted [`LinkGenerator`] for conversation tests: records every request and returns a
//! canned outcome.

use async_trait::async_trait;
use shortlink_client::{GenerateError, GenerationRequest, LinkGenerator};
use std::sync::Arc;
use tokio::sync::Mutex;

enum ScriptedOutcome {
    Link(String),
    Transport,
    MissingLink,
}

pub struct MockLinkGenerator {
    outcome: ScriptedOutcome,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockLinkGenerator {
    /// Always returns the given link.
    pub fn with_link(link: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: ScriptedOutcome::Link(link.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Always fails with a transport error.
    pub fn with_transport_failure() -> Arc<Self> {
        Arc::new(Self {
            outcome: ScriptedOutcome::Transport,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Always fails with a missing-link (parse) error.
    pub fn with_missing_link() -> Arc<Self> {
        Arc::new(Self {
            outcome: ScriptedOutcome::MissingLink,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Requests seen so far, in order.
    pub async fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl LinkGenerator for MockLinkGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        self.requests.lock().await.push(request.clone());
        match &self.outcome {
            ScriptedOutcome::Link(link) => Ok(link.clone()),
            ScriptedOutcome::Transport => {
                Err(GenerateError::Transport("connection refused".to_string()))
            }
            ScriptedOutcome::MissingLink => Err(GenerateError::MissingLink),
        }
    }
}
