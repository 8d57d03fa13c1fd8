// Frequency ranking of non-stopword tokens.
//
// Counts are kept in first-occurrence order and sorted with a stable sort,
// so terms with equal counts keep the order in which they first appeared in
// the token stream. That tie-break is part of the output contract.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::summary::TopicSummary;
use super::tokenize::tokenize_messages;
use super::traits::TopicExtractor;

/// Term counts for one conversation, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        for token in tokens {
            match table.index.get(token) {
                Some(&slot) => table.entries[slot].1 += 1,
                None => {
                    table.index.insert(token.to_string(), table.entries.len());
                    table.entries.push((token.to_string(), 1));
                }
            }
        }
        table
    }

    pub fn count(&self, term: &str) -> usize {
        self.index
            .get(term)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `limit` most frequent terms, ties in first-occurrence order.
    pub fn top(&self, limit: usize) -> Vec<String> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(term, _)| term.clone())
            .collect()
    }
}

/// Drop stopwords and return the `limit` most frequent remaining tokens.
pub fn frequency_rank(tokens: &[String], stopwords: &HashSet<String>, limit: usize) -> Vec<String> {
    let table = FrequencyTable::from_tokens(
        tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !stopwords.contains(*t)),
    );
    table.top(limit)
}

/// Frequency-ranking topic extractor used by the dashboard.
pub struct FrequencyExtractor {
    /// How many terms to keep per conversation
    pub top_k: usize,
}

impl Default for FrequencyExtractor {
    fn default() -> Self {
        Self { top_k: 10 }
    }
}

impl TopicExtractor for FrequencyExtractor {
    fn extract(&self, messages: &[String], stopwords: &HashSet<String>) -> TopicSummary {
        let tokens = tokenize_messages(messages);
        let kept: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !stopwords.contains(*t))
            .collect();

        let table = FrequencyTable::from_tokens(kept.iter().copied());
        let top_terms = table.top(self.top_k);

        debug!(
            raw_tokens = tokens.len(),
            kept_tokens = kept.len(),
            vocabulary = table.len(),
            "Ranked conversation terms"
        );

        TopicSummary {
            top_terms,
            token_count: kept.len(),
        }
    }
}
