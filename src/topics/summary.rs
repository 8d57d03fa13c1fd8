// Analysis results: ranked terms per contact and corpus-wide length scale.
//
// These are what the dashboard's contact cards consume. Term weights are
// derived from rank only, so the first term always weighs 1.0 and the rest
// step down evenly.

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::corpus::models::CurrentUser;

/// Output of a `TopicExtractor` for one conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    /// Most frequent non-stopword terms, highest first
    pub top_terms: Vec<String>,
    /// Number of non-stopword tokens in the conversation
    pub token_count: usize,
}

/// A ranked term with its rank-derived weight in (0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTerm {
    pub term: String,
    pub weight: f64,
}

/// Per-contact analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub username: String,
    pub image: String,
    pub top_terms: Vec<RankedTerm>,
    pub token_count: usize,
}

/// Whole-corpus analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusAnalysis {
    pub users: Vec<AnalysisResult>,
    /// Largest `token_count` of any contact, for relative scaling
    pub max_token_count: usize,
    pub current_user: CurrentUser,
}

/// Attach weights to a ranked term list: rank `i` of `n` weighs `(n - i) / n`.
pub fn rank_weights(terms: &[String]) -> Vec<RankedTerm> {
    let n = terms.len();
    terms
        .iter()
        .enumerate()
        .map(|(i, term)| RankedTerm {
            term: term.clone(),
            weight: (n - i) as f64 / n as f64,
        })
        .collect()
}

impl AnalysisResult {
    pub fn terms(&self) -> Vec<&str> {
        self.top_terms.iter().map(|t| t.term.as_str()).collect()
    }
}

impl CorpusAnalysis {
    /// Share of `max_token_count` for one contact, 0.0 when nothing was said.
    pub fn relative_length(&self, result: &AnalysisResult) -> f64 {
        if self.max_token_count == 0 {
            0.0
        } else {
            result.token_count as f64 / self.max_token_count as f64
        }
    }

    /// Print the per-contact term summary with a length bar.
    pub fn display(&self) {
        println!(
            "\n{}",
            format!(
                "=== Conversations of {} ({} contacts) ===",
                self.current_user.name,
                self.users.len()
            )
            .bold()
        );
        println!();

        let bar_width: usize = 20;

        for (i, user) in self.users.iter().enumerate() {
            let share = self.relative_length(user);
            let filled = (share * bar_width as f64).round() as usize;
            let empty = bar_width.saturating_sub(filled);
            let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

            let colored_bar = if share >= 0.66 {
                bar.bright_green()
            } else if share >= 0.33 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            println!(
                "  {:>2}. {:<24} {} {} words",
                i + 1,
                user.username.bold(),
                colored_bar,
                user.token_count
            );

            let terms = if user.top_terms.is_empty() {
                "(none)".to_string()
            } else {
                user.terms().join(", ")
            };
            println!("      Top terms: {}", terms.dimmed());
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_weights_step_down() {
        let terms = vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()];
        let weighted = rank_weights(&terms);
        let weights: Vec<f64> = weighted.iter().map(|t| t.weight).collect();
        assert_eq!(weights, vec![1.0, 0.75, 0.5, 0.25]);
    }

    #[test]
    fn test_rank_weights_empty() {
        assert!(rank_weights(&[]).is_empty());
    }

    #[test]
    fn test_relative_length_zero_max() {
        let analysis = CorpusAnalysis {
            users: vec![],
            max_token_count: 0,
            current_user: CurrentUser {
                name: "Cosi".to_string(),
                image: String::new(),
            },
        };
        let silent = AnalysisResult {
            username: "Alex".to_string(),
            image: String::new(),
            top_terms: vec![],
            token_count: 0,
        };
        assert_eq!(analysis.relative_length(&silent), 0.0);
    }
}
