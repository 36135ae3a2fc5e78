//! # Vantage Ext File
//!
//! File-based and in-memory collaborators for the Vantage commentary engine.
//!
//! This crate provides default implementations for offline runs, demos and tests:
//! - CSV price-bar signal source (period high/low, 14-period RSI, volume change)
//! - JSON news feed matched on the ticker's base symbol
//! - CSV benchmark session source
//! - In-memory static sources and always-empty sources
//!
//! Every file source re-reads its file on each request, so edits are picked up
//! by the next analysis pass.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod market_data;
mod memory;
mod news;
mod signal;

pub use market_data::*;
pub use memory::*;
pub use news::*;
pub use signal::*;

use std::path::Path;
use std::sync::Arc;

use vantage_traits::{BenchmarkSource, MarketSignalSource, NewsSource};

/// Create a signal source over a directory of `<ticker>.csv` bar files, or an
/// empty source when no directory is given.
pub fn create_signal_source(bars_dir: Option<&Path>) -> Arc<dyn MarketSignalSource> {
    match bars_dir {
        Some(dir) => Arc::new(CsvSignalSource::new(dir)),
        None => Arc::new(EmptySignalSource),
    }
}

/// Create a news source over a JSON feed file, or an empty source.
pub fn create_news_source(news_file: Option<&Path>) -> Arc<dyn NewsSource> {
    match news_file {
        Some(path) => Arc::new(JsonNewsSource::new(path)),
        None => Arc::new(EmptyNewsSource),
    }
}

/// Create a benchmark source over a sessions CSV file, or an empty source.
pub fn create_benchmark_source(benchmark_file: Option<&Path>) -> Arc<dyn BenchmarkSource> {
    match benchmark_file {
        Some(path) => Arc::new(CsvBenchmarkSource::new(path)),
        None => Arc::new(EmptyBenchmarkSource),
    }
}
