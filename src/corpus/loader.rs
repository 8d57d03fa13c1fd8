// Corpus loading and validation.
//
// Shape errors (a non-string message, a missing name field) are reported
// by serde. Validation then rejects blank names, which would otherwise
// produce an empty stopword contribution and unlabeled rows downstream.
// A conversation with no messages is valid.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::models::Corpus;

/// Read and validate a corpus from a JSON file.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    let corpus = parse_corpus(&json)
        .with_context(|| format!("Failed to load corpus from {}", path.display()))?;

    info!(
        path = %path.display(),
        conversations = corpus.conversations.len(),
        messages = corpus.message_count(),
        "Loaded corpus"
    );

    Ok(corpus)
}

/// Parse and validate a corpus from a JSON string.
pub fn parse_corpus(json: &str) -> Result<Corpus> {
    let corpus: Corpus = serde_json::from_str(json).context("Invalid corpus")?;
    validate(&corpus)?;
    Ok(corpus)
}

/// Reject corpora with blank names.
pub fn validate(corpus: &Corpus) -> Result<()> {
    if corpus.current_user.name.trim().is_empty() {
        anyhow::bail!("Invalid corpus: current_user.name is empty");
    }
    for (i, conversation) in corpus.conversations.iter().enumerate() {
        if conversation.username.trim().is_empty() {
            anyhow::bail!("Invalid corpus: conversation {i} has an empty username");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture_shape() {
        let json = r#"{
            "current_user": { "name": "Cosi", "image": "cosi.png" },
            "messages": [
                {
                    "username": "Alex",
                    "profile": { "username": "Alex", "image": "alex.png" },
                    "messages": ["Alex: hi, 10:00am"]
                }
            ]
        }"#;
        let corpus = parse_corpus(json).unwrap();
        assert_eq!(corpus.current_user.name, "Cosi");
        assert_eq!(corpus.conversations.len(), 1);
        assert_eq!(corpus.conversations[0].profile.image, "alex.png");
    }

    #[test]
    fn test_missing_messages_is_empty_conversation() {
        let json = r#"{ "current_user": { "name": "Cosi" }, "messages": [ { "username": "Alex" } ] }"#;
        let corpus = parse_corpus(json).unwrap();
        assert!(corpus.conversations[0].messages.is_empty());
    }

    #[test]
    fn test_non_string_message_is_rejected() {
        let json = r#"{ "current_user": { "name": "Cosi" }, "messages": [ { "username": "Alex", "messages": [42] } ] }"#;
        let err = parse_corpus(json).unwrap_err();
        assert!(err.to_string().contains("Invalid corpus"));
    }

    #[test]
    fn test_missing_current_user_is_rejected() {
        let json = r#"{ "messages": [] }"#;
        assert!(parse_corpus(json).is_err());
    }

    #[test]
    fn test_blank_username_is_rejected() {
        let json = r#"{ "current_user": { "name": "Cosi" }, "messages": [ { "username": "  " } ] }"#;
        let err = parse_corpus(json).unwrap_err();
        assert!(err.to_string().contains("empty username"));
    }
}
