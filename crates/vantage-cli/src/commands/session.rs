//! Session command implementation.
//!
//! History lives for one process, so a session runs every requested pass
//! against a single engine.

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::cli::OutputFormat;
use crate::commands::build_engine;
use crate::config::CliConfig;
use crate::output::{print_header, print_history_entry, print_json, print_report};

/// One pass of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Step {
    /// Plain analysis
    Analyze,
    /// Analysis with improvement annotations
    Improve,
}

/// Arguments for the session command.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Passes to run, in order
    #[arg(value_enum, required = true)]
    pub steps: Vec<Step>,

    /// Print the full history, newest first, instead of each report
    #[arg(long)]
    pub history: bool,
}

/// Execute the session command.
pub fn execute(args: SessionArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let engine = build_engine(config)?;

    let snapshots: Vec<_> = args
        .steps
        .iter()
        .map(|step| match step {
            Step::Analyze => engine.analyze(),
            Step::Improve => engine.improve(),
        })
        .collect();

    if args.history {
        let newest_first: Vec<_> = engine.history().into_iter().rev().collect();
        match format {
            OutputFormat::Text => newest_first.iter().for_each(print_history_entry),
            OutputFormat::Json => print_json(&newest_first)?,
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text => {
            for snapshot in &snapshots {
                print_header(&format!("{} {}", snapshot.kind, snapshot.id));
                print_report(snapshot);
            }
        }
        OutputFormat::Json => print_json(&snapshots)?,
    }
    Ok(())
}
