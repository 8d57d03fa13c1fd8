// Conversation-level risk labels and the corpus suspicion percentage.
//
// The risk label counts every (message, keyword) match across a whole
// conversation and buckets the total. The suspicion percentage is a
// separate measure: the share of messages with at least one match.

use serde::{Deserialize, Serialize};

use super::keywords::{is_flagged, keyword_hits};
use crate::corpus::models::Conversation;

/// Coarse risk label shown on contact cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cumulative hit counts at which a conversation moves up a level.
pub struct RiskThresholds {
    /// Hits at or above this are Medium (default 2)
    pub medium: usize,
    /// Hits at or above this are High (default 5)
    pub high: usize,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self { medium: 2, high: 5 }
    }
}

impl RiskThresholds {
    pub fn level(&self, hits: usize) -> RiskLevel {
        match hits {
            h if h >= self.high => RiskLevel::High,
            h if h >= self.medium => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

/// Keyword hits and the resulting label for one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub hits: usize,
    pub level: RiskLevel,
}

/// Count (message, keyword) matches across `messages` and label the total.
pub fn conversation_risk(
    messages: &[String],
    keywords: &[&str],
    thresholds: &RiskThresholds,
) -> RiskAssessment {
    let hits: usize = messages
        .iter()
        .map(|m| keyword_hits(m, keywords))
        .sum();
    RiskAssessment {
        hits,
        level: thresholds.level(hits),
    }
}

/// Percentage (0-100) of messages across `conversations` that contain at
/// least one keyword. Zero messages gives 0.
pub fn suspicion_percentage(conversations: &[Conversation], keywords: &[&str]) -> u8 {
    let mut total = 0usize;
    let mut flagged = 0usize;
    for message in conversations.iter().flat_map(|c| c.messages.iter()) {
        total += 1;
        if is_flagged(message, keywords) {
            flagged += 1;
        }
    }

    if total == 0 {
        return 0;
    }
    (flagged as f64 / total as f64 * 100.0).round() as u8
}
