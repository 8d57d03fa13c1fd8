// Markdown investigation report.
//
// The report is the document an investigator downloads: suspect, overall
// suspicion percentage, the list of relations with their risk labels, and
// every chat verbatim. Scores come from the same keyword policy as the
// dashboard.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::corpus::models::Corpus;
use crate::pipeline::chats::chat_overviews;
use crate::scoring::keywords::SUSPICIOUS_KEYWORDS;
use crate::scoring::risk::suspicion_percentage;

/// Render the report with an explicit generation timestamp.
pub fn render_report(corpus: &Corpus, generated_at: &str) -> String {
    let score = suspicion_percentage(&corpus.conversations, SUSPICIOUS_KEYWORDS);
    let overviews = chat_overviews(corpus);

    let mut md = String::from("# Investigation Report\n\n");
    md.push_str(&format!("**Report generated on:** {generated_at}\n\n"));
    md.push_str(&format!("### Suspect: **{}**\n", corpus.current_user.name));
    md.push_str(&format!("### Chat Suspicious Score: **{score}%**\n\n"));

    md.push_str("## Suspect Relations:\n");
    for overview in &overviews {
        md.push_str(&format!(
            "- **{}** ({} risk, {} keyword hits)\n",
            overview.username, overview.risk.level, overview.risk.hits
        ));
    }

    md.push_str("\n## Chats:\n\n");
    for (i, conversation) in corpus.conversations.iter().enumerate() {
        md.push_str(&format!("### {}. {}\n", i + 1, conversation.username));
        md.push_str("#### Messages:\n");
        if conversation.messages.is_empty() {
            md.push_str("_No messages._\n");
        }
        for message in &conversation.messages {
            md.push_str(&format!("- {message}\n"));
        }
        md.push('\n');
    }

    md.push_str("---\n**End of Report.**\n");
    md
}

/// Write the report to `output_path`, creating parent directories.
/// Returns the path written.
pub fn generate_report(corpus: &Corpus, output_path: &str) -> Result<String> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let report = render_report(corpus, &generated_at);

    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, &report)
        .with_context(|| format!("Failed to write report to {output_path}"))?;

    info!(path = output_path, bytes = report.len(), "Wrote investigation report");
    Ok(output_path.to_string())
}
