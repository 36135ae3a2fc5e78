//! Analyze command implementation.
//!
//! Generates one commentary report.

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::commands::build_engine;
use crate::config::CliConfig;
use crate::output::{print_json, print_report};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Follow the analysis with this many improved passes and print the last
    #[arg(long, default_value = "0")]
    pub improve: usize,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let engine = build_engine(config)?;

    let mut snapshot = engine.analyze();
    for _ in 0..args.improve {
        snapshot = engine.improve();
    }

    match format {
        OutputFormat::Text => print_report(&snapshot),
        OutputFormat::Json => print_json(&snapshot)?,
    }
    Ok(())
}
