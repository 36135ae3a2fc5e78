//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AnalyzeArgs, HeatmapArgs, HoldingsArgs, SessionArgs};

/// Vantage - equity portfolio risk and commentary
#[derive(Parser)]
#[command(name = "vantage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Portfolio configuration file (TOML). Defaults to the built-in portfolio.
    #[arg(short, long, env = "VANTAGE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a commentary report
    Analyze(AnalyzeArgs),

    /// Run a sequence of analyze/improve passes against one history
    Session(SessionArgs),

    /// Show per-sector risk scores
    Heatmap(HeatmapArgs),

    /// Show the holdings table
    Holdings(HoldingsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}
