use std::env;
use std::path::PathBuf;

use anyhow::Result;

pub const DEFAULT_DATA_PATH: &str = "./assets/data.json";
pub const DEFAULT_REPORT_PATH: &str = "output/casewatch-report.md";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// value has a default, so an empty environment works against the bundled
/// fixture.
pub struct Config {
    /// Case fixture with the chat logs (CASEWATCH_DATA_PATH)
    pub data_path: PathBuf,
    /// Where `report` writes the Markdown report (CASEWATCH_REPORT_PATH)
    pub report_path: String,
    /// HTTP port for `serve` (PORT)
    pub port: u16,
    /// Bind address for `serve` (CASEWATCH_BIND)
    pub bind: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a number between 0 and 65535, got {raw:?}"))?,
            Err(_) => 3000,
        };

        Ok(Self {
            data_path: env::var("CASEWATCH_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH)),
            report_path: env::var("CASEWATCH_REPORT_PATH")
                .unwrap_or_else(|_| DEFAULT_REPORT_PATH.to_string()),
            port,
            bind: env::var("CASEWATCH_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
        })
    }

    /// Check that the case fixture exists.
    /// Call this before any command that reads the corpus.
    pub fn require_data(&self) -> Result<()> {
        if !self.data_path.exists() {
            anyhow::bail!(
                "Corpus file not found at {}\n\
                 Set CASEWATCH_DATA_PATH in your .env file or pass --data.",
                self.data_path.display()
            );
        }
        Ok(())
    }
}
