// Corpus: the chat logs under analysis and how they are loaded.

pub mod loader;
pub mod message;
pub mod models;
