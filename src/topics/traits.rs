// Topic extractor trait.
//
// The dashboard only needs a crude "what is this chat about" summary, and
// the default implementation is plain frequency ranking. Keeping it behind
// a trait lets the corpus pipeline run with another ranking without
// changes.

use std::collections::HashSet;

use super::summary::TopicSummary;

/// Summarize one conversation's messages into ranked terms.
pub trait TopicExtractor {
    /// `stopwords` is the corpus-scoped set; implementations must not add
    /// to it or keep it between calls.
    fn extract(&self, messages: &[String], stopwords: &HashSet<String>) -> TopicSummary;
}
