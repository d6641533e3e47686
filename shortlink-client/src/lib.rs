//! # Link generation client
//!
//! Defines the [`LinkGenerator`] trait and the HTTP implementation against the remote
//! link-shortening service. Used by shortlink-conversation; tests substitute scripted mocks.

use async_trait::async_trait;
use thiserror::Error;

mod http_generator;

pub use http_generator::{HttpLinkGenerator, LinkServiceConfig};

/// One generation request: the sanitized recipient handle and an optional message
/// (empty string when the user skipped it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub handle: String,
    pub message: String,
}

impl GenerationRequest {
    /// Creates a request. The caller guarantees `handle` is non-empty (sanitization
    /// rejects empty handles before a request is ever built).
    pub fn new(handle: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            message: message.into(),
        }
    }
}

/// Why a generation attempt produced no link. Surfaced to the user as a plain-text
/// failure notice; never aborts the conversation.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("link service request failed: {0}")]
    Transport(String),

    #[error("no short link found in response")]
    MissingLink,
}

/// Link generator interface: submit a request, get the generated link. One attempt per
/// invocation, no retries.
#[async_trait]
pub trait LinkGenerator: Send + Sync {
    /// Returns the generated link for the given request.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError>;
}
