// Stopword sets, scoped to a single corpus.
//
// The base list covers English function words plus chat filler. Each corpus
// adds the name parts of everyone in it, so "Jane Doe" contributes "jane"
// and "doe". A set is built fresh for every corpus and never shared between
// them.

use std::collections::HashSet;

use crate::corpus::models::Corpus;

/// Common English function words and chat filler excluded from ranking.
pub const BASE_STOPWORDS: &[&str] = &[
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those",
    // auxiliaries
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing",
    // articles
    "a", "an", "the",
    // conjunctions
    "and", "but", "if", "or", "because", "as", "until", "while",
    // prepositions
    "of", "at", "by", "for", "with", "through", "during", "before", "after", "above", "below",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "to",
    // filler
    "s", "k", "u", "no", "ok",
];

/// Union of the base list with every lowercased whitespace-separated part
/// of every name.
pub fn build_stopword_set<'a, I>(base: &[&str], names: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut set: HashSet<String> = base.iter().map(|w| w.to_string()).collect();
    for name in names {
        set.extend(name.split_whitespace().map(str::to_lowercase));
    }
    set
}

/// Stopwords for one corpus: the base list plus the current user's and
/// every participant's name parts.
pub fn for_corpus(corpus: &Corpus) -> HashSet<String> {
    let names = std::iter::once(corpus.current_user.name.as_str())
        .chain(corpus.conversations.iter().map(|c| c.username.as_str()));
    build_stopword_set(BASE_STOPWORDS, names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parts_are_lowercased() {
        let set = build_stopword_set(&[], ["Jane Doe", "JOHN  Smith"]);
        for part in ["jane", "doe", "john", "smith"] {
            assert!(set.contains(part), "missing {part}");
        }
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_base_list_is_kept() {
        let set = build_stopword_set(BASE_STOPWORDS, std::iter::empty());
        assert_eq!(set.len(), BASE_STOPWORDS.len());
        assert!(set.contains("ok"));
        assert!(!set.contains("weed"));
    }

    #[test]
    fn test_sets_do_not_leak_between_corpora() {
        let first = build_stopword_set(BASE_STOPWORDS, ["Alex"]);
        let second = build_stopword_set(BASE_STOPWORDS, ["Sam"]);
        assert!(first.contains("alex"));
        assert!(!second.contains("alex"));
    }
}
