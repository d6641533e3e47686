//! Rendering of generation outcomes into outbound replies, including chunking of
//! oversized links.

use crate::controls::OPEN_LINK_LABEL;
use shortlink_client::GenerateError;
use shortlink_core::Reply;

/// Maximum characters per outbound reply (Telegram message limit).
pub const MAX_REPLY_CHARS: usize = 4096;

pub(crate) const MSG_TRANSPORT_FAILED: &str = "Failed to generate the link.";
pub(crate) const MSG_PARSE_FAILED: &str = "Failed to extract the link from the response.";

/// Splits `text` into consecutive non-overlapping pieces of at most `max_chars` characters,
/// in order. Concatenating the pieces restores the original string.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Renders a generation outcome as the ordered replies to send.
///
/// A link that fits in one message is delivered with an inline open button. An oversized
/// link is delivered as bare chunks without the button; the asymmetry matches the observed
/// upstream behavior. Failures become one plain-text notice.
pub fn render_outcome(outcome: &Result<String, GenerateError>) -> Vec<Reply> {
    match outcome {
        Ok(link) => {
            if link.chars().count() > MAX_REPLY_CHARS {
                split_chunks(link, MAX_REPLY_CHARS)
                    .into_iter()
                    .map(Reply::text)
                    .collect()
            } else {
                vec![Reply::with_link_button(
                    format!("Here is your generated link: {}", link),
                    OPEN_LINK_LABEL,
                    link.clone(),
                )]
            }
        }
        Err(GenerateError::Transport(_)) => vec![Reply::text(MSG_TRANSPORT_FAILED)],
        Err(GenerateError::MissingLink) => vec![Reply::text(MSG_PARSE_FAILED)],
    }
}
