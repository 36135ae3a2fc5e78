//! In-memory collaborators.
//!
//! Mutable through shared references, so a test or demo can change what the
//! engine sees between analysis passes.

use std::collections::HashMap;

use parking_lot::RwLock;

use vantage_traits::{
    BenchmarkSource, MarketSignal, MarketSignalSource, NewsItem, NewsSource, SessionBar, Ticker,
    TraitError,
};

// =============================================================================
// STATIC SIGNAL SOURCE
// =============================================================================

/// In-memory signal source keyed by ticker.
#[derive(Default)]
pub struct StaticSignalSource {
    signals: RwLock<HashMap<Ticker, MarketSignal>>,
}

impl StaticSignalSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the signal for a ticker.
    pub fn insert(&self, ticker: impl Into<Ticker>, signal: MarketSignal) -> Option<MarketSignal> {
        self.signals.write().insert(ticker.into(), signal)
    }

    /// Remove the signal for a ticker.
    pub fn remove(&self, ticker: &Ticker) -> Option<MarketSignal> {
        self.signals.write().remove(ticker)
    }

    /// Number of tickers with a signal.
    pub fn len(&self) -> usize {
        self.signals.read().len()
    }

    /// Check if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.signals.read().is_empty()
    }
}

impl MarketSignalSource for StaticSignalSource {
    fn fetch_signal(&self, ticker: &Ticker) -> Result<Option<MarketSignal>, TraitError> {
        Ok(self.signals.read().get(ticker).copied())
    }
}

// =============================================================================
// STATIC NEWS SOURCE
// =============================================================================

/// In-memory news feed with base-symbol matching.
#[derive(Default)]
pub struct StaticNewsSource {
    items: RwLock<Vec<NewsItem>>,
}

impl StaticNewsSource {
    /// Create an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a feed from items.
    pub fn from_items(items: Vec<NewsItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Append an item.
    pub fn push(&self, item: NewsItem) {
        self.items.write().push(item);
    }

    /// Remove every item.
    pub fn clear(&self) {
        self.items.write().clear();
    }
}

impl NewsSource for StaticNewsSource {
    fn fetch_news(&self, ticker: &Ticker) -> Result<Vec<NewsItem>, TraitError> {
        let symbol = ticker.base_symbol();
        Ok(self
            .items
            .read()
            .iter()
            .filter(|item| item.mentions(symbol))
            .cloned()
            .collect())
    }
}

// =============================================================================
// STATIC BENCHMARK SOURCE
// =============================================================================

/// In-memory benchmark sessions keyed by index symbol.
#[derive(Default)]
pub struct StaticBenchmarkSource {
    sessions: RwLock<HashMap<Ticker, SessionBar>>,
}

impl StaticBenchmarkSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latest session for an index.
    pub fn set(&self, index_symbol: impl Into<Ticker>, session: SessionBar) {
        self.sessions.write().insert(index_symbol.into(), session);
    }
}

impl BenchmarkSource for StaticBenchmarkSource {
    fn fetch_latest_session(
        &self,
        index_symbol: &Ticker,
    ) -> Result<Option<SessionBar>, TraitError> {
        Ok(self.sessions.read().get(index_symbol).copied())
    }
}
