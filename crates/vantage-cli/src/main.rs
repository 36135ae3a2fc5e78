//! Vantage CLI - portfolio risk and commentary from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Commentary for the built-in portfolio
//! vantage analyze
//!
//! # Your own portfolio and data files
//! vantage --config vantage.toml analyze
//!
//! # Several passes against one history, then the history newest first
//! vantage session analyze improve improve --history
//!
//! # Sector risk heatmap and holdings table
//! vantage heatmap
//! vantage holdings --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::CliConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay clean
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,vantage=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,vantage=info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &config, format)?,
        Commands::Session(args) => commands::session::execute(args, &config, format)?,
        Commands::Heatmap(args) => commands::heatmap::execute(args, &config, format)?,
        Commands::Holdings(args) => commands::holdings::execute(args, &config, format)?,
    }

    Ok(())
}
