// Chat list and chat detail views.
//
// The list labels each conversation with its cumulative keyword risk. The
// detail view parses every line and scores it on its own with the capped
// per-message formula. Both use the shared keyword list.

use serde::Serialize;

use crate::corpus::message::ParsedMessage;
use crate::corpus::models::{Conversation, Corpus};
use crate::scoring::keywords::SUSPICIOUS_KEYWORDS;
use crate::scoring::message::{message_score, MessageScoreWeights};
use crate::scoring::risk::{conversation_risk, RiskAssessment, RiskThresholds};

/// One row of the suspicious-chats list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatOverview {
    pub username: String,
    pub image: String,
    pub message_count: usize,
    pub last_message: Option<String>,
    #[serde(flatten)]
    pub risk: RiskAssessment,
}

/// A parsed chat line with its message-level score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMessage {
    #[serde(flatten)]
    pub message: ParsedMessage,
    pub suspicion_score: u32,
}

/// Overview rows for every conversation, in corpus order.
pub fn chat_overviews(corpus: &Corpus) -> Vec<ChatOverview> {
    let thresholds = RiskThresholds::default();
    corpus
        .conversations
        .iter()
        .map(|c| ChatOverview {
            username: c.username.clone(),
            image: c.profile.image.clone(),
            message_count: c.messages.len(),
            last_message: c.last_message().map(str::to_string),
            risk: conversation_risk(&c.messages, SUSPICIOUS_KEYWORDS, &thresholds),
        })
        .collect()
}

/// Parse and score the lines of one conversation. Lines that do not parse
/// are skipped.
pub fn chat_messages(conversation: &Conversation, current_user: &str) -> Vec<ScoredMessage> {
    let weights = MessageScoreWeights::default();
    conversation
        .messages
        .iter()
        .filter_map(|raw| ParsedMessage::parse(raw, current_user))
        .map(|message| {
            let suspicion_score = message_score(&message.text, SUSPICIOUS_KEYWORDS, &weights);
            ScoredMessage {
                message,
                suspicion_score,
            }
        })
        .collect()
}
