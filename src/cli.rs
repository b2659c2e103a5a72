//! CLI interface for the job-signals analyst

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-signals")]
#[command(about = "Market signals from extracted job postings")]
#[command(long_about = "Aggregate statistics, role-specific skills, skill co-occurrence networks and overload scores over a corpus of structured job records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every analysis over a corpus of job records
    Analyze {
        /// JSON file or directory of JSON files holding job records
        #[arg(long)]
        corpus: PathBuf,

        /// Output format (console, json)
        #[arg(short, long)]
        output: Option<String>,

        /// Save the full report as JSON to this file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skills kept per role in the TF-IDF ranking
        #[arg(long)]
        top_k: Option<usize>,

        /// Minimum number of postings a skill pair must share
        #[arg(long)]
        min_cofrequency: Option<u64>,

        /// Run the analyses one after another
        #[arg(long)]
        sequential: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}
