use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use casewatch::config::Config;
use casewatch::corpus::models::Corpus;

/// casewatch: chat-log case analysis.
///
/// Summarizes what a suspect talks about with each contact and flags
/// conversations containing drug- and crime-related keywords. Scores are
/// keyword heuristics, not evidence.
#[derive(Parser)]
#[command(name = "casewatch", version, about)]
struct Cli {
    /// Corpus JSON file (overrides CASEWATCH_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the top terms and word counts for every contact
    Analyze {
        /// Print the analysis as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List conversations with their keyword risk level
    Chats,

    /// Show one conversation with per-message suspicion scores
    Chat {
        /// Contact name (case-insensitive)
        name: String,
    },

    /// Show the overall suspicion score (share of flagged messages)
    Score,

    /// Export all messages as CSV
    Csv {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Generate a Markdown investigation report
    Report {
        /// Output path (overrides CASEWATCH_REPORT_PATH)
        #[arg(long)]
        output: Option<String>,
    },

    /// Serve the dashboard JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides CASEWATCH_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("casewatch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(path) = cli.data {
        config.data_path = path;
    }

    match cli.command {
        Commands::Analyze { json } => {
            let corpus = load_corpus(&config)?;
            let analysis = casewatch::pipeline::analysis::analyze_corpus(&corpus);
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                analysis.display();
            }
        }

        Commands::Chats => {
            let corpus = load_corpus(&config)?;
            let chats = casewatch::pipeline::chats::chat_overviews(&corpus);
            casewatch::output::terminal::display_chat_list(&chats);
        }

        Commands::Chat { name } => {
            let corpus = load_corpus(&config)?;
            let Some(conversation) = corpus.conversation(&name) else {
                anyhow::bail!(
                    "No conversation with {name:?}. Run `casewatch chats` to list contacts."
                );
            };
            let messages =
                casewatch::pipeline::chats::chat_messages(conversation, &corpus.current_user.name);
            casewatch::output::terminal::display_chat_detail(&conversation.username, &messages);
        }

        Commands::Score => {
            let corpus = load_corpus(&config)?;
            let score = casewatch::scoring::risk::suspicion_percentage(
                &corpus.conversations,
                casewatch::scoring::keywords::SUSPICIOUS_KEYWORDS,
            );
            casewatch::output::terminal::display_suspicion_score(&corpus.current_user.name, score);
        }

        Commands::Csv { output } => {
            let corpus = load_corpus(&config)?;
            let csv = casewatch::output::csv::render_csv(&corpus)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, csv)?;
                    info!(path = %path.display(), "Wrote CSV export");
                    println!("CSV export saved to: {}", path.display());
                }
                None => print!("{csv}"),
            }
        }

        Commands::Report { output } => {
            let corpus = load_corpus(&config)?;
            let output = output.unwrap_or_else(|| config.report_path.clone());
            let report_path = casewatch::output::markdown::generate_report(&corpus, &output)?;
            println!(
                "{}",
                format!("Markdown report saved to: {report_path}").bold()
            );
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let corpus = load_corpus(&config)?;
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            casewatch::web::run_server(corpus, port, &bind).await?;
        }
    }

    Ok(())
}

fn load_corpus(config: &Config) -> Result<Corpus> {
    config.require_data()?;
    casewatch::corpus::loader::load_corpus(&config.data_path)
}
