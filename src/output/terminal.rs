// Colored terminal output for chat lists and chat detail.
//
// This module handles all terminal-specific formatting. The main.rs
// command arms delegate here.

use colored::Colorize;

use crate::pipeline::chats::{ChatOverview, ScoredMessage};
use crate::scoring::risk::RiskLevel;

/// Display the suspicious-chats list, highest risk first.
pub fn display_chat_list(chats: &[ChatOverview]) {
    if chats.is_empty() {
        println!("No conversations in the corpus.");
        return;
    }

    let mut ranked: Vec<&ChatOverview> = chats.iter().collect();
    ranked.sort_by(|a, b| b.risk.hits.cmp(&a.risk.hits));

    println!(
        "\n{}",
        format!("=== Suspicious Chats ({} conversations) ===", chats.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<24} {:<8}  {:>4}  {:>8}",
        "Rank".dimmed(),
        "Contact".dimmed(),
        "Risk".dimmed(),
        "Hits".dimmed(),
        "Messages".dimmed(),
    );
    println!("  {}", "-".repeat(56).dimmed());

    for (i, chat) in ranked.iter().enumerate() {
        println!(
            "  {:>4}. {:<24} {:<8}  {:>4}  {:>8}",
            i + 1,
            chat.username,
            colorize_risk(chat.risk.level),
            chat.risk.hits,
            chat.message_count,
        );
        if let Some(last) = &chat.last_message {
            println!("        {}", super::truncate_chars(last, 70).dimmed());
        }
    }

    println!();

    let high = chats.iter().filter(|c| c.risk.level == RiskLevel::High).count();
    let medium = chats.iter().filter(|c| c.risk.level == RiskLevel::Medium).count();
    if high > 0 {
        println!("  {} {} high-risk chats", "!!".red().bold(), high);
    }
    if medium > 0 {
        println!("  {} {} medium-risk chats", "!".yellow(), medium);
    }
}

/// Display every parsed message of one chat with its score.
pub fn display_chat_detail(username: &str, messages: &[ScoredMessage]) {
    println!("\n{}", format!("=== Chat with {username} ===").bold());

    if messages.is_empty() {
        println!("  No messages.");
        return;
    }

    for scored in messages {
        let msg = &scored.message;
        let sender = if msg.from_current_user {
            msg.sender_name.cyan()
        } else {
            msg.sender_name.normal()
        };
        println!(
            "  [{:>4}] {:<8} {}: {}",
            colorize_score(scored.suspicion_score),
            msg.timestamp.dimmed(),
            sender,
            super::truncate_chars(&msg.text, 100)
        );
    }
}

/// Display the corpus-wide suspicion percentage.
pub fn display_suspicion_score(suspect: &str, score: u8) {
    let colored_score = match score {
        s if s >= 50 => format!("{s}%").red().bold(),
        s if s >= 20 => format!("{s}%").yellow(),
        s => format!("{s}%").green(),
    };
    println!("Suspect: {}", suspect.bold());
    println!("Chat suspicious score: {colored_score}");
}

fn colorize_risk(level: RiskLevel) -> colored::ColoredString {
    match level {
        RiskLevel::High => level.as_str().red().bold(),
        RiskLevel::Medium => level.as_str().yellow(),
        RiskLevel::Low => level.as_str().green(),
    }
}

fn colorize_score(score: u32) -> colored::ColoredString {
    match score {
        s if s >= 500 => s.to_string().red().bold(),
        s if s > 100 => s.to_string().yellow(),
        s => s.to_string().dimmed(),
    }
}
