//! File-based market signal and benchmark sources.

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use tracing::{debug, warn};

use vantage_traits::{
    BenchmarkSource, MarketSignal, MarketSignalSource, PriceBar, SessionBar, Ticker, TraitError,
};

use crate::signal::derive_signal;

/// Calendar days of history used for signal derivation (one month).
pub const DEFAULT_WINDOW_DAYS: i64 = 31;

// =============================================================================
// CSV SIGNAL SOURCE
// =============================================================================

/// CSV-based signal source.
///
/// Reads `<bars_dir>/<ticker>.csv` with columns
/// `date,open,high,low,close,volume` on every request and derives the signal
/// over the trailing window ending at the latest bar.
pub struct CsvSignalSource {
    bars_dir: PathBuf,
    window_days: i64,
}

impl CsvSignalSource {
    /// Create a new CSV signal source.
    pub fn new(bars_dir: impl AsRef<Path>) -> Self {
        Self {
            bars_dir: bars_dir.as_ref().to_path_buf(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Set the trailing window in calendar days.
    pub fn with_window_days(mut self, days: i64) -> Self {
        self.window_days = days.max(1);
        self
    }

    /// Path of the bar file for a ticker.
    pub fn bar_file(&self, ticker: &Ticker) -> PathBuf {
        self.bars_dir.join(format!("{}.csv", ticker.as_str()))
    }

    /// Load all valid bars for a ticker, oldest first.
    ///
    /// Returns `Ok(None)` when the ticker has no bar file.
    pub fn load_bars(&self, ticker: &Ticker) -> Result<Option<Vec<PriceBar>>, TraitError> {
        let path = self.bar_file(ticker);
        if !path.exists() {
            debug!(ticker = %ticker, path = %path.display(), "no bar file");
            return Ok(None);
        }

        let mut reader =
            csv::Reader::from_path(&path).map_err(|e| TraitError::IoError(e.to_string()))?;

        let mut bars = Vec::new();
        for result in reader.deserialize() {
            let bar: PriceBar = result.map_err(|e| TraitError::ParseError(e.to_string()))?;
            if !is_valid_bar(&bar) {
                warn!(ticker = %ticker, date = %bar.date, "skipping malformed bar");
                continue;
            }
            bars.push(bar);
        }

        bars.sort_by_key(|b| b.date);
        debug!(ticker = %ticker, bars = bars.len(), "loaded bars");
        Ok(Some(bars))
    }

    fn trailing_window(&self, bars: Vec<PriceBar>) -> Vec<PriceBar> {
        let Some(last) = bars.last().map(|b| b.date) else {
            return bars;
        };
        let start: NaiveDate = last - Duration::days(self.window_days);
        bars.into_iter().filter(|b| b.date > start).collect()
    }
}

fn is_valid_bar(bar: &PriceBar) -> bool {
    let values = [bar.open, bar.high, bar.low, bar.close, bar.volume];
    values.iter().all(|v| v.is_finite() && *v >= 0.0) && bar.high >= bar.low
}

impl MarketSignalSource for CsvSignalSource {
    fn fetch_signal(&self, ticker: &Ticker) -> Result<Option<MarketSignal>, TraitError> {
        let Some(bars) = self.load_bars(ticker)? else {
            return Ok(None);
        };
        Ok(derive_signal(&self.trailing_window(bars)))
    }
}

// =============================================================================
// CSV BENCHMARK SOURCE
// =============================================================================

/// CSV record for benchmark sessions.
#[derive(Debug, Deserialize)]
struct SessionRecord {
    symbol: String,
    date: NaiveDate,
    open: f64,
    close: f64,
}

/// CSV-based benchmark source.
///
/// Reads `symbol,date,open,close` rows on every request and returns the most
/// recent session for the requested index.
pub struct CsvBenchmarkSource {
    file_path: PathBuf,
}

impl CsvBenchmarkSource {
    /// Create a new CSV benchmark source.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }
}

impl BenchmarkSource for CsvBenchmarkSource {
    fn fetch_latest_session(
        &self,
        index_symbol: &Ticker,
    ) -> Result<Option<SessionBar>, TraitError> {
        if !self.file_path.exists() {
            return Ok(None); // Empty source
        }

        let mut reader = csv::Reader::from_path(&self.file_path)
            .map_err(|e| TraitError::IoError(e.to_string()))?;

        let mut latest: Option<SessionRecord> = None;
        for result in reader.deserialize() {
            let record: SessionRecord = result.map_err(|e| TraitError::ParseError(e.to_string()))?;
            if record.symbol != index_symbol.as_str() {
                continue;
            }
            if latest.as_ref().map_or(true, |l| record.date >= l.date) {
                latest = Some(record);
            }
        }

        debug!(symbol = %index_symbol, found = latest.is_some(), "benchmark session");
        Ok(latest.map(|r| SessionBar::new(r.open, r.close)))
    }
}

// =============================================================================
// EMPTY IMPLEMENTATIONS
// =============================================================================

/// Empty signal source.
pub struct EmptySignalSource;

impl MarketSignalSource for EmptySignalSource {
    fn fetch_signal(&self, _ticker: &Ticker) -> Result<Option<MarketSignal>, TraitError> {
        Ok(None)
    }
}

/// Empty benchmark source.
pub struct EmptyBenchmarkSource;

impl BenchmarkSource for EmptyBenchmarkSource {
    fn fetch_latest_session(
        &self,
        _index_symbol: &Ticker,
    ) -> Result<Option<SessionBar>, TraitError> {
        Ok(None)
    }
}
