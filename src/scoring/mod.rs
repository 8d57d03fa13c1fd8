// Suspicion scoring: keyword matching and the scores built on it.
//
// All scores here are best-effort keyword heuristics meant to direct an
// investigator's attention. A hit is not evidence of wrongdoing.

pub mod keywords;
pub mod message;
pub mod risk;
