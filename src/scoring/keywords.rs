// Flagged keyword list and case-insensitive containment matching.
//
// Matching is substring-based, so "drug" also hits "drugs" and "organ"
// also hits "organize". Exports and the dashboard share this list so their
// numbers agree.

/// Drug- and crime-related substrings flagged in chat text.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "drug",
    "weed",
    "cocaine",
    "heroin",
    "meth",
    "steroid",
    "abduction",
    "trafficking",
    "organ",
    "mafia",
    "police",
    "arrested",
    "illegal",
    "smuggle",
    "black money",
    "cash",
    "dealer",
];

/// Keywords contained in `message`, in keyword-list order.
pub fn matched_keywords<'k>(message: &str, keywords: &[&'k str]) -> Vec<&'k str> {
    let lower = message.to_lowercase();
    keywords
        .iter()
        .copied()
        .filter(|kw| lower.contains(&kw.to_lowercase()))
        .collect()
}

/// Number of keywords contained in `message`.
pub fn keyword_hits(message: &str, keywords: &[&str]) -> usize {
    matched_keywords(message, keywords).len()
}

/// Whether `message` contains any keyword.
pub fn is_flagged(message: &str, keywords: &[&str]) -> bool {
    let lower = message.to_lowercase();
    keywords.iter().any(|kw| lower.contains(&kw.to_lowercase()))
}
