// Per-message suspicion score for the chat detail view.
//
// Separate from the conversation risk label on purpose: this one rewards
// each distinct keyword inside a single message and is capped, the other
// sums hits over a whole conversation.

use super::keywords::keyword_hits;

/// Constants of the per-message score.
///
/// `score = min(base + per_keyword * hits, cap)`
pub struct MessageScoreWeights {
    /// Score of a message with no hits (default 100)
    pub base: u32,
    /// Added per matched keyword (default 200)
    pub per_keyword: u32,
    /// Upper bound (default 1000)
    pub cap: u32,
}

impl Default for MessageScoreWeights {
    fn default() -> Self {
        Self {
            base: 100,
            per_keyword: 200,
            cap: 1000,
        }
    }
}

/// Score one message in `[base, cap]`.
pub fn message_score(message: &str, keywords: &[&str], weights: &MessageScoreWeights) -> u32 {
    let hits = keyword_hits(message, keywords) as u32;
    weights
        .base
        .saturating_add(weights.per_keyword.saturating_mul(hits))
        .min(weights.cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::keywords::SUSPICIOUS_KEYWORDS;

    #[test]
    fn test_clean_message_scores_base() {
        let w = MessageScoreWeights::default();
        assert_eq!(message_score("see you at lunch", SUSPICIOUS_KEYWORDS, &w), 100);
    }

    #[test]
    fn test_one_keyword() {
        let w = MessageScoreWeights::default();
        assert_eq!(message_score("got the weed", SUSPICIOUS_KEYWORDS, &w), 300);
    }

    #[test]
    fn test_capped() {
        let w = MessageScoreWeights::default();
        let msg = "drug dealer with cash, police arrested the mafia";
        assert_eq!(message_score(msg, SUSPICIOUS_KEYWORDS, &w), 1000);
    }
}
