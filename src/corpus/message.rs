// Raw chat line parsing.
//
// Lines look like "Sender Name: message text, 10:01am". The sender ends at
// the first colon and the timestamp starts after the last comma, so commas
// inside the text survive.

use serde::Serialize;

/// A chat line split into sender, text, and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedMessage {
    pub sender_name: String,
    pub text: String,
    pub timestamp: String,
    /// True when the sender name starts with the current user's name
    pub from_current_user: bool,
}

impl ParsedMessage {
    /// Parse a raw line. Returns `None` when the line has no colon or no
    /// comma after the sender.
    pub fn parse(raw: &str, current_user: &str) -> Option<Self> {
        let (sender, rest) = raw.split_once(':')?;
        let sender = sender.trim();
        let (text, timestamp) = rest.trim().rsplit_once(',')?;

        // "Cosi S" in the log still belongs to current user "Cosi"
        let from_current_user = sender
            .to_lowercase()
            .starts_with(&current_user.to_lowercase());

        Some(Self {
            sender_name: sender.to_string(),
            text: text.trim().to_string(),
            timestamp: timestamp.trim().to_string(),
            from_current_user,
        })
    }
}

/// Split a raw line at its last comma into (body, timestamp).
///
/// Lines without a comma come back whole with an empty timestamp.
pub fn split_timestamp(raw: &str) -> (&str, &str) {
    match raw.rsplit_once(',') {
        Some((body, timestamp)) => (body.trim(), timestamp.trim()),
        None => (raw.trim(), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_commas_in_text() {
        let msg = ParsedMessage::parse("Cosi: cool, cash only, 10:02am", "Cosi").unwrap();
        assert_eq!(msg.sender_name, "Cosi");
        assert_eq!(msg.text, "cool, cash only");
        assert_eq!(msg.timestamp, "10:02am");
        assert!(msg.from_current_user);
    }

    #[test]
    fn test_sender_prefix_matches_current_user() {
        let msg = ParsedMessage::parse("cosi S: hey, 9:00pm", "Cosi").unwrap();
        assert!(msg.from_current_user);
        let other = ParsedMessage::parse("Alex: hey, 9:00pm", "Cosi").unwrap();
        assert!(!other.from_current_user);
    }

    #[test]
    fn test_unparseable_lines() {
        assert!(ParsedMessage::parse("no sender here, 10:00", "Cosi").is_none());
        assert!(ParsedMessage::parse("Alex: no timestamp", "Cosi").is_none());
    }

    #[test]
    fn test_split_timestamp() {
        assert_eq!(split_timestamp("Alex: a, b, 10:01am"), ("Alex: a, b", "10:01am"));
        assert_eq!(split_timestamp("Alex: hi"), ("Alex: hi", ""));
    }
}
