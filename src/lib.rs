// casewatch: chat-log case analysis.
//
// This is the library root. Each module corresponds to a stage of the
// analysis: loading the corpus, extracting topics, scoring suspicion, and
// presenting the results.

pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod topics;

#[cfg(feature = "web")]
pub mod web;
