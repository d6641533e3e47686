//! Shared pure functions for control-label matching and handle sanitization.
//!
//! Buttons render with decorated labels (`Create Link 🔗`, `❌Cancel❌`, `Get Link 🔗`) but
//! activations arrive as plain text, and clients may send the bare stem. Matching therefore
//! strips the decorative emoji and surrounding whitespace and compares the stem exactly;
//! arbitrary text that merely contains a label is not a control.

/// Label on the entry-keyboard button that starts a conversation.
pub const CREATE_LINK_LABEL: &str = "Create Link 🔗";
/// Label on the cancel button shown during a conversation.
pub const CANCEL_LABEL: &str = "❌Cancel❌";
/// Label on the button that requests the link without a message.
pub const GET_LINK_LABEL: &str = "Get Link 🔗";
/// Label on the inline button attached to a delivered link.
pub const OPEN_LINK_LABEL: &str = "Open Link";

/// Command that shows the entry prompt.
pub const START_COMMAND: &str = "/start";
/// Command that cancels the current conversation from any state.
pub const CANCEL_COMMAND: &str = "/cancel";

/// Strips surrounding whitespace and the decorative 🔗/❌ emoji from a control activation.
fn label_stem(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '🔗' || c == '❌')
}

/// True if `text` activates the create-link control.
#[inline]
pub fn is_create_control(text: &str) -> bool {
    label_stem(text) == "Create Link"
}

/// True if `text` activates the cancel control.
#[inline]
pub fn is_cancel_control(text: &str) -> bool {
    label_stem(text) == "Cancel"
}

/// True if `text` activates the get-link control.
#[inline]
pub fn is_get_link_control(text: &str) -> bool {
    label_stem(text) == "Get Link"
}

/// Sanitizes a handle: trims surrounding whitespace, then drops at most one leading `@`.
/// Returns `None` when nothing remains; an empty handle is never forwarded to generation.
pub fn sanitize_handle(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let stripped = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorated_labels_match_their_controls() {
        assert!(is_create_control(CREATE_LINK_LABEL));
        assert!(is_cancel_control(CANCEL_LABEL));
        assert!(is_get_link_control(GET_LINK_LABEL));
    }

    #[test]
    fn bare_stems_match_their_controls() {
        assert!(is_create_control("Create Link"));
        assert!(is_cancel_control("Cancel"));
        assert!(is_get_link_control("Get Link"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(is_create_control("  Create Link 🔗 "));
        assert!(is_cancel_control(" ❌Cancel❌\n"));
    }

    #[test]
    fn containing_text_is_not_a_control() {
        assert!(!is_create_control("please Create Link for me"));
        assert!(!is_cancel_control("do not Cancel this"));
        assert!(!is_get_link_control("where do I Get Link?"));
    }

    #[test]
    fn sanitize_trims_and_strips_leading_at() {
        assert_eq!(sanitize_handle("  @alice "), Some("alice".to_string()));
        assert_eq!(sanitize_handle("alice"), Some("alice".to_string()));
    }

    #[test]
    fn sanitize_strips_only_one_at() {
        assert_eq!(sanitize_handle("@@alice"), Some("@alice".to_string()));
    }

    #[test]
    fn sanitize_is_idempotent_over_the_at_prefix() {
        let once = sanitize_handle("@alice").unwrap();
        assert_eq!(sanitize_handle(&once), Some(once.clone()));
        assert_eq!(sanitize_handle("alice"), Some(once));
    }

    #[test]
    fn sanitize_rejects_whitespace_and_lone_at() {
        assert_eq!(sanitize_handle(""), None);
        assert_eq!(sanitize_handle("   "), None);
        assert_eq!(sanitize_handle("@"), None);
        assert_eq!(sanitize_handle(" @  "), None);
    }
}
