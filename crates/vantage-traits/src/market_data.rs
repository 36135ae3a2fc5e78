//! Market data source traits.
//!
//! These traits define interfaces for market data providers:
//! - [`MarketSignalSource`]: Trailing-window statistics and the momentum indicator for a ticker
//! - [`BenchmarkSource`]: The most recent session of a reference index
//!
//! Both are snapshot (request/response) sources. Nothing here is cached:
//! every call is expected to return current data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TraitError;
use crate::ids::Ticker;

// =============================================================================
// PRICE BARS
// =============================================================================

/// One daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Session date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Session high
    pub high: f64,
    /// Session low
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: f64,
}

// =============================================================================
// MARKET SIGNAL
// =============================================================================

/// Signals derived from a ticker's recent price history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSignal {
    /// Highest price over the trailing window
    pub period_high: f64,
    /// Lowest price over the trailing window
    pub period_low: f64,
    /// Momentum indicator (RSI), always within [0, 100]
    pub momentum: f64,
    /// Last session volume relative to the window mean, in percent
    pub volume_change_pct: f64,
}

impl MarketSignal {
    /// Create a signal, clamping the momentum indicator into [0, 100].
    pub fn new(period_high: f64, period_low: f64, momentum: f64, volume_change_pct: f64) -> Self {
        Self {
            period_high,
            period_low,
            momentum: momentum.clamp(0.0, 100.0),
            volume_change_pct,
        }
    }

    /// Create a signal carrying only a momentum reading.
    pub fn from_momentum(momentum: f64) -> Self {
        Self::new(0.0, 0.0, momentum, 0.0)
    }
}

/// Trait for market signal providers.
///
/// Implementations should return `Ok(None)` when no history exists for the
/// ticker. An `Err` is treated by callers exactly like `Ok(None)`.
pub trait MarketSignalSource: Send + Sync {
    /// Get the current signal for a ticker.
    fn fetch_signal(&self, ticker: &Ticker) -> Result<Option<MarketSignal>, TraitError>;
}

// =============================================================================
// BENCHMARK SESSION
// =============================================================================

/// Open and close of one index session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionBar {
    /// Session open
    pub open: f64,
    /// Session close
    pub close: f64,
}

impl SessionBar {
    /// Create a new session bar.
    pub fn new(open: f64, close: f64) -> Self {
        Self { open, close }
    }

    /// Percent change from open to close.
    ///
    /// Returns `None` when the open is not a positive finite number.
    pub fn change_pct(&self) -> Option<f64> {
        if !self.open.is_finite() || !self.close.is_finite() || self.open <= 0.0 {
            return None;
        }
        Some((self.close - self.open) / self.open * 100.0)
    }
}

/// Trait for benchmark index providers.
pub trait BenchmarkSource: Send + Sync {
    /// Get the most recent session for an index symbol (e.g. `^NSEI`).
    fn fetch_latest_session(
        &self,
        index_symbol: &Ticker,
    ) -> Result<Option<SessionBar>, TraitError>;
}
