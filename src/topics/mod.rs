// Topic extraction: tokenization, stopword scoping, and top-term ranking.

pub mod frequency;
pub mod stopwords;
pub mod summary;
pub mod tokenize;
pub mod traits;
