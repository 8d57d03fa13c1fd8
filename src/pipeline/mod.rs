// Pipelines: compose tokenization, ranking and scoring over a whole corpus.

pub mod analysis;
pub mod chats;
