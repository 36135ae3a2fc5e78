//! CLI command implementations.

pub mod analyze;
pub mod heatmap;
pub mod holdings;
pub mod session;

pub use analyze::AnalyzeArgs;
pub use heatmap::HeatmapArgs;
pub use holdings::HoldingsArgs;
pub use session::SessionArgs;

use tracing::debug;
use vantage_ext_file::{create_benchmark_source, create_news_source, create_signal_source};
use vantage_portfolio::{CommentaryEngine, CommentaryEngineBuilder};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Builds an engine wired to the configured data files.
pub fn build_engine(config: &CliConfig) -> CliResult<CommentaryEngine> {
    let data = &config.data;
    debug!(
        bars_dir = ?data.bars_dir,
        news_file = ?data.news_file,
        benchmark_file = ?data.benchmark_file,
        "wiring collaborators"
    );

    Ok(CommentaryEngineBuilder::from_config(&config.portfolio)?
        .with_signals(create_signal_source(data.bars_dir.as_deref()))
        .with_news(create_news_source(data.news_file.as_deref()))
        .with_benchmark(create_benchmark_source(data.benchmark_file.as_deref()))
        .build())
}
