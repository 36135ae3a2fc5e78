//! Shared fixtures for unit tests.

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vantage_traits::{
    BenchmarkSource, MarketSignal, MarketSignalSource, NewsItem, NewsSource, SessionBar, Ticker,
    TraitError,
};
use vantage_ext_file::{StaticBenchmarkSource, StaticNewsSource, StaticSignalSource};

use crate::commentary::Collaborators;
use crate::types::{BenchmarkConfig, HoldingConfig, PortfolioConfig, SectorDefinition};
use crate::Portfolio;

fn holding(
    ticker: &str,
    name: &str,
    quantity: u64,
    buy: Decimal,
    current: Decimal,
) -> HoldingConfig {
    HoldingConfig {
        ticker: Ticker::new(ticker),
        name: name.to_string(),
        quantity,
        purchase_price: buy,
        current_price: current,
    }
}

/// The ten-stock NSE portfolio.
pub(crate) fn nifty_config() -> PortfolioConfig {
    PortfolioConfig {
        name: "NSE Core".to_string(),
        currency_symbol: "₹".to_string(),
        benchmark: Some(BenchmarkConfig::new(NIFTY_INDEX, "Nifty 50")),
        holdings: vec![
            holding("RELIANCE.NS", "Reliance Industries", 100, dec!(1200), dec!(1264.65)),
            holding("TCS.NS", "Tata Consultancy Services", 50, dec!(3200), dec!(3419.80)),
            holding("INFY.NS", "Infosys", 75, dec!(1500), dec!(1640.70)),
            holding("HDFCBANK.NS", "HDFC Bank", 75, dec!(1900), dec!(2006.45)),
            holding("ICICIBANK.NS", "ICICI Bank", 100, dec!(1300), dec!(1425.10)),
            holding("KOTAKBANK.NS", "Kotak Mahindra Bank", 30, dec!(2000), dec!(2129.80)),
            holding("ITC.NS", "ITC Ltd", 150, dec!(400), dec!(418)),
            holding("BHARTIARTL.NS", "Bharti Airtel", 60, dec!(1500), dec!(1630.55)),
            holding("ASIANPAINTS.NS", "Asian Paints", 40, dec!(2200), dec!(2424.20)),
            holding("LT.NS", "Larsen & Toubro", 50, dec!(3500), dec!(3300)),
        ],
        sectors: vec![
            SectorDefinition::new("Technology", ["TCS.NS", "INFY.NS"]),
            SectorDefinition::new("Banking", ["HDFCBANK.NS", "ICICIBANK.NS", "KOTAKBANK.NS"]),
            SectorDefinition::new("Conglomerate", ["RELIANCE.NS"]),
            SectorDefinition::new("Consumer", ["ITC.NS", "ASIANPAINTS.NS"]),
            SectorDefinition::new("Telecom", ["BHARTIARTL.NS"]),
            SectorDefinition::new("Industrial", ["LT.NS"]),
        ],
    }
}

pub(crate) fn nifty_portfolio() -> Portfolio {
    nifty_config().build_portfolio().unwrap()
}

/// Benchmark symbol of [`nifty_config`].
pub(crate) const NIFTY_INDEX: &str = "^NSEI";

/// In-memory collaborators with optional per-ticker failures.
#[derive(Default)]
pub(crate) struct StubSources {
    signals: StaticSignalSource,
    news: StaticNewsSource,
    benchmark: StaticBenchmarkSource,
    failing: HashSet<String>,
}

impl StubSources {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_momentum(self, ticker: &str, momentum: f64) -> Self {
        self.signals.insert(ticker, MarketSignal::from_momentum(momentum));
        self
    }

    /// Adds a feed item; it reaches every ticker whose base symbol it mentions.
    pub(crate) fn with_news(self, item: NewsItem) -> Self {
        self.news.push(item);
        self
    }

    pub(crate) fn with_session(self, session: SessionBar) -> Self {
        self.benchmark.set(NIFTY_INDEX, session);
        self
    }

    pub(crate) fn failing_for(mut self, ticker: &str) -> Self {
        self.failing.insert(ticker.to_string());
        self
    }

    pub(crate) fn collaborators(self) -> Collaborators {
        let shared = Arc::new(self);
        Collaborators::new()
            .with_signals(shared.clone())
            .with_news(shared.clone())
            .with_benchmark(shared)
    }

    fn check(&self, ticker: &Ticker) -> Result<(), TraitError> {
        if self.failing.contains(ticker.as_str()) {
            return Err(TraitError::ConnectionFailed(format!(
                "stub failure for {ticker}"
            )));
        }
        Ok(())
    }
}

impl MarketSignalSource for StubSources {
    fn fetch_signal(&self, ticker: &Ticker) -> Result<Option<MarketSignal>, TraitError> {
        self.check(ticker)?;
        self.signals.fetch_signal(ticker)
    }
}

impl NewsSource for StubSources {
    fn fetch_news(&self, ticker: &Ticker) -> Result<Vec<NewsItem>, TraitError> {
        self.check(ticker)?;
        self.news.fetch_news(ticker)
    }
}

impl BenchmarkSource for StubSources {
    fn fetch_latest_session(
        &self,
        index_symbol: &Ticker,
    ) -> Result<Option<SessionBar>, TraitError> {
        self.check(index_symbol)?;
        self.benchmark.fetch_latest_session(index_symbol)
    }
}

/// Collaborator that fails every request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingSource;

impl MarketSignalSource for FailingSource {
    fn fetch_signal(&self, _ticker: &Ticker) -> Result<Option<MarketSignal>, TraitError> {
        Err(TraitError::Timeout)
    }
}

impl NewsSource for FailingSource {
    fn fetch_news(&self, _ticker: &Ticker) -> Result<Vec<NewsItem>, TraitError> {
        Err(TraitError::SourceNotAvailable("news".into()))
    }
}

impl BenchmarkSource for FailingSource {
    fn fetch_latest_session(
        &self,
        _index_symbol: &Ticker,
    ) -> Result<Option<SessionBar>, TraitError> {
        Err(TraitError::NotFound("benchmark".into()))
    }
}
