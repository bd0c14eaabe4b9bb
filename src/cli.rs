//! CLI interface for the candidate ranking engine

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitrank")]
#[command(about = "Deterministic candidate scoring and ranking for recruiting pipelines")]
#[command(
    long_about = "Score candidates against a job description from their LeetCode, GitHub, and LinkedIn snapshots, then rank, classify, and explain the results"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (TOML weights and thresholds)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: console, json
    #[arg(short, long, global = true, default_value = "console")]
    pub output: String,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a candidate pool against a job description
    Rank {
        /// Path to the candidate pool (JSON array)
        #[arg(short = 'p', long)]
        candidates: PathBuf,

        /// Path to the job description (plain text)
        #[arg(short, long)]
        job: PathBuf,

        /// Restrict ranking to these candidate ids (repeatable)
        #[arg(long)]
        id: Vec<String>,

        /// Show only the top N candidates
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Check one candidate's eligibility for a job
    Check {
        /// Path to the candidate pool (JSON array)
        #[arg(short = 'p', long)]
        candidates: PathBuf,

        /// Path to the job description (plain text)
        #[arg(short, long)]
        job: PathBuf,

        /// Candidate id to check
        #[arg(short, long)]
        id: String,
    },

    /// Generate a skill improvement roadmap for one candidate
    Roadmap {
        /// Path to the candidate pool (JSON array)
        #[arg(short = 'p', long)]
        candidates: PathBuf,

        /// Path to the job description (plain text)
        #[arg(short, long)]
        job: PathBuf,

        /// Candidate id to plan for
        #[arg(short, long)]
        id: String,
    },

    /// Explain how one candidate's score was computed
    Explain {
        /// Path to the candidate pool (JSON array)
        #[arg(short = 'p', long)]
        candidates: PathBuf,

        /// Path to the job description (plain text)
        #[arg(short, long)]
        job: PathBuf,

        /// Candidate id to explain
        #[arg(short, long)]
        id: String,
    },

    /// Analyze a job description: role, skills, experience
    AnalyzeJd {
        /// Path to the job description (plain text)
        #[arg(short, long)]
        job: PathBuf,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::output::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::output::OutputFormat::Console),
        "json" => Ok(crate::output::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}
