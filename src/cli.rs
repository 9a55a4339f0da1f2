//! Command-line interface for tabalign

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tabalign")]
#[command(about = "Row-aligns two tab-separated datasets for side-by-side comparison")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align a control and a test dataset and emit pasteable comparison text
    Align {
        /// Control dataset file ("-" for stdin)
        control: String,

        /// Test dataset file ("-" for stdin)
        test: String,

        /// Column header that must match for two rows to pair (repeatable; order matters)
        #[arg(long = "key", value_name = "HEADER")]
        keys: Vec<String>,

        /// Write the aligned text to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,

        /// Suppress the run summary
        #[arg(long)]
        quiet: bool,
    },

    /// List a dataset's column headers and their normalized field identifiers
    Fields {
        /// Input dataset file ("-" for stdin)
        input: String,
    },
}

/// Parse output format string
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'pretty' or 'json'", s)),
        }
    }
}
