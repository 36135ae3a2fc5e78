//! Fault-isolating wrapper around the collaborator trait objects.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};
use vantage_traits::{
    BenchmarkSource, MarketSignal, MarketSignalSource, NewsItem, NewsSource, SessionBar, Ticker,
};

/// The external sources an analysis pass reads from.
///
/// A missing source behaves like one that never has data. Every accessor
/// swallows collaborator errors after logging them, so one failing ticker
/// only degrades its own report lines.
#[derive(Clone, Default)]
pub struct Collaborators {
    /// Market signal source.
    pub signals: Option<Arc<dyn MarketSignalSource>>,
    /// News source.
    pub news: Option<Arc<dyn NewsSource>>,
    /// Benchmark index source.
    pub benchmark: Option<Arc<dyn BenchmarkSource>>,
}

impl Collaborators {
    /// Creates an empty set of collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the market signal source.
    #[must_use]
    pub fn with_signals(mut self, source: Arc<dyn MarketSignalSource>) -> Self {
        self.signals = Some(source);
        self
    }

    /// Sets the news source.
    #[must_use]
    pub fn with_news(mut self, source: Arc<dyn NewsSource>) -> Self {
        self.news = Some(source);
        self
    }

    /// Sets the benchmark source.
    #[must_use]
    pub fn with_benchmark(mut self, source: Arc<dyn BenchmarkSource>) -> Self {
        self.benchmark = Some(source);
        self
    }

    /// Fetches the market signal for a ticker; `None` on absence or failure.
    #[must_use]
    pub fn signal(&self, ticker: &Ticker) -> Option<MarketSignal> {
        let source = self.signals.as_ref()?;
        match source.fetch_signal(ticker) {
            Ok(signal) => {
                debug!(ticker = %ticker, available = signal.is_some(), "market signal");
                signal
            }
            Err(e) => {
                warn!(ticker = %ticker, error = %e, "market signal lookup failed");
                None
            }
        }
    }

    /// Fetches news for a ticker; empty on failure.
    #[must_use]
    pub fn news(&self, ticker: &Ticker) -> Vec<NewsItem> {
        let Some(source) = self.news.as_ref() else {
            return Vec::new();
        };
        match source.fetch_news(ticker) {
            Ok(items) => items,
            Err(e) => {
                warn!(ticker = %ticker, error = %e, "news lookup failed");
                Vec::new()
            }
        }
    }

    /// Fetches the latest benchmark session; `None` on absence or failure.
    #[must_use]
    pub fn benchmark_session(&self, symbol: &Ticker) -> Option<SessionBar> {
        let source = self.benchmark.as_ref()?;
        match source.fetch_latest_session(symbol) {
            Ok(session) => session,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "benchmark lookup failed");
                None
            }
        }
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators")
            .field("signals", &self.signals.is_some())
            .field("news", &self.news.is_some())
            .field("benchmark", &self.benchmark.is_some())
            .finish()
    }
}
