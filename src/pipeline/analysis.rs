// Corpus analysis: top terms and token counts for every contact.
//
// One stopword set is built per corpus from the base list and every name in
// it, then applied to all conversations alike. Nothing is cached between
// calls, so the same corpus always yields the same result.

use tracing::info;

use crate::corpus::models::Corpus;
use crate::topics::frequency::FrequencyExtractor;
use crate::topics::stopwords;
use crate::topics::summary::{rank_weights, AnalysisResult, CorpusAnalysis};
use crate::topics::traits::TopicExtractor;

/// Analyze a corpus with the default top-10 frequency extractor.
pub fn analyze_corpus(corpus: &Corpus) -> CorpusAnalysis {
    analyze_with(corpus, &FrequencyExtractor::default())
}

/// Analyze a corpus with a custom extractor.
pub fn analyze_with(corpus: &Corpus, extractor: &dyn TopicExtractor) -> CorpusAnalysis {
    let stopwords = stopwords::for_corpus(corpus);

    let users: Vec<AnalysisResult> = corpus
        .conversations
        .iter()
        .map(|conversation| {
            let summary = extractor.extract(&conversation.messages, &stopwords);
            AnalysisResult {
                username: conversation.username.clone(),
                image: conversation.profile.image.clone(),
                top_terms: rank_weights(&summary.top_terms),
                token_count: summary.token_count,
            }
        })
        .collect();

    let max_token_count = users.iter().map(|u| u.token_count).max().unwrap_or(0);

    info!(
        current_user = %corpus.current_user.name,
        contacts = users.len(),
        stopwords = stopwords.len(),
        max_token_count,
        "Analyzed corpus"
    );

    CorpusAnalysis {
        users,
        max_token_count,
        current_user: corpus.current_user.clone(),
    }
}
