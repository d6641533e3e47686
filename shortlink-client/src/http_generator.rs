//! HTTP implementation of [`LinkGenerator`]: POSTs the handle and message as form fields and
//! extracts the generated link from the HTML response.

use crate::{GenerateError, GenerationRequest, LinkGenerator};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::env;
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_SERVICE_URL: &str = "https://telegram.koyeb.app/";
/// The upstream service does not document a response deadline; an unbounded wait would hang
/// the user's conversation turn, so requests are capped and expiry surfaces as Transport.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Link service endpoint and timeout. Loaded from env: `LINK_SERVICE_URL`,
/// `LINK_SERVICE_TIMEOUT_SECS`; both optional.
#[derive(Debug, Clone)]
pub struct LinkServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl LinkServiceConfig {
    /// Loads from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let base_url =
            env::var("LINK_SERVICE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
        let timeout_secs = env::var("LINK_SERVICE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url,
            timeout_secs,
        }
    }
}

impl Default for LinkServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Calls the remote link-shortening service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLinkGenerator {
    client: Client,
    base_url: String,
}

impl HttpLinkGenerator {
    /// Creates a generator for the given config. The request timeout is set on the client.
    pub fn new(config: LinkServiceConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            base_url: config.base_url,
        }
    }

    /// Returns the configured service URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Finds the anchor tagged `id="shortLink"` and returns its `href`. Tolerates either
/// attribute order and single or double quotes.
fn extract_short_link(html: &str) -> Option<String> {
    let anchor_re = Regex::new(r#"(?is)<a\b[^>]*\bid\s*=\s*["']shortLink["'][^>]*>"#).unwrap();
    let tag = anchor_re.find(html)?;
    let href_re = Regex::new(r#"(?is)\bhref\s*=\s*["']([^"']*)["']"#).unwrap();
    href_re
        .captures(tag.as_str())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[async_trait]
impl LinkGenerator for HttpLinkGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        info!(
            handle = %request.handle,
            message_len = request.message.len(),
            "Requesting short link"
        );

        let params = [
            ("username", request.handle.as_str()),
            ("message", request.message.as_str()),
        ];
        let response = self
            .client
            .post(&self.base_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Transport(format!(
                "unexpected status {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;
        debug!(body_len = body.len(), "Link service responded");

        extract_short_link(&body).ok_or(GenerateError::MissingLink)
    }
}
