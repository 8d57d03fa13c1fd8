// CSV export of the raw chat logs.
//
// One row per raw line: contact, message body, timestamp. The body keeps
// the "Sender: " prefix so the export shows who wrote each line.

use anyhow::{Context, Result};

use crate::corpus::message::split_timestamp;
use crate::corpus::models::Corpus;

pub const CSV_HEADER: [&str; 3] = ["User", "Message", "Time"];

/// Render the corpus as CSV with every field quoted.
pub fn render_csv(corpus: &Corpus) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(vec![]);

    writer
        .write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;

    for conversation in &corpus.conversations {
        for raw in &conversation.messages {
            let (body, timestamp) = split_timestamp(raw);
            writer
                .write_record([conversation.username.as_str(), body, timestamp])
                .with_context(|| format!("Failed to write CSV row for {}", conversation.username))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV export: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV export is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::models::{Conversation, CurrentUser};

    fn corpus_with(messages: Vec<String>) -> Corpus {
        Corpus {
            current_user: CurrentUser {
                name: "Cosi".to_string(),
                image: String::new(),
            },
            conversations: vec![Conversation::new("Alex", messages)],
        }
    }

    #[test]
    fn test_rows_and_quoting() {
        let corpus = corpus_with(vec![
            "Alex: he said \"now\", ok, 10:01am".to_string(),
            "Alex: no time".to_string(),
        ]);
        let csv = render_csv(&corpus).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], r#""User","Message","Time""#);
        assert_eq!(lines[1], r#""Alex","Alex: he said ""now"", ok","10:01am""#);
        assert_eq!(lines[2], r#""Alex","Alex: no time","""#);
    }

    #[test]
    fn test_embedded_newline_stays_inside_quotes() {
        let corpus = corpus_with(vec!["Alex: line1\nline2 \"q\", 10:00am".to_string()]);
        let csv = render_csv(&corpus).unwrap();
        assert_eq!(
            csv,
            "\"User\",\"Message\",\"Time\"\n\"Alex\",\"Alex: line1\nline2 \"\"q\"\"\",\"10:00am\"\n"
        );

        // Reading it back yields one record, not two
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][1], "Alex: line1\nline2 \"q\"");
    }
}
