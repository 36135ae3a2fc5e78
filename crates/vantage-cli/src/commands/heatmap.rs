//! Heatmap command implementation.

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::commands::build_engine;
use crate::config::CliConfig;
use crate::output::{print_header, print_json, render_heatmap};

/// Arguments for the heatmap command.
#[derive(Args, Debug)]
pub struct HeatmapArgs {}

/// Execute the heatmap command.
pub fn execute(_args: HeatmapArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let engine = build_engine(config)?;
    let heatmap = engine.risk_heatmap();

    match format {
        OutputFormat::Text => {
            print_header("Sector Risk Heatmap");
            for line in render_heatmap(&heatmap) {
                println!("{line}");
            }
        }
        OutputFormat::Json => print_json(heatmap.entries())?,
    }
    Ok(())
}
