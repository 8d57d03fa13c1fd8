// Tokenizer for chat message text.
//
// A token is a maximal run of ASCII letters after lowercasing. Digits,
// punctuation, emoji and whitespace all act as separators and never end up
// inside a token, so "Drug123 DEAL!" becomes ["drug", "deal"].

use std::sync::LazyLock;

use regex_lite::Regex;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]+").expect("word pattern is a valid regex"));

/// Split text into lowercase alphabetic tokens. Total over all strings.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokenize a conversation as one stream.
///
/// Messages are joined with a single space first, so message boundaries
/// are not preserved in the output.
pub fn tokenize_messages(messages: &[String]) -> Vec<String> {
    tokenize(&messages.join(" "))
}
