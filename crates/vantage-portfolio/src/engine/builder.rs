//! Builder for the commentary engine.

use std::sync::Arc;

use parking_lot::Mutex;
use vantage_traits::{BenchmarkSource, MarketSignalSource, NewsSource};

use super::CommentaryEngine;
use crate::clock::{Clock, SystemClock};
use crate::commentary::{Collaborators, CommentaryComposer};
use crate::history::{HistoryStore, ImprovementRules};
use crate::types::{BenchmarkConfig, PortfolioConfig};
use crate::{Portfolio, PortfolioResult};

/// Builder for constructing a [`CommentaryEngine`].
///
/// Unset collaborators behave as sources with no data.
pub struct CommentaryEngineBuilder {
    portfolio: Portfolio,
    composer: CommentaryComposer,
    sources: Collaborators,
    rules: ImprovementRules,
    clock: Option<Arc<dyn Clock>>,
}

impl CommentaryEngineBuilder {
    /// Create a builder for a validated portfolio.
    #[must_use]
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            composer: CommentaryComposer::new(),
            sources: Collaborators::new(),
            rules: ImprovementRules::default(),
            clock: None,
        }
    }

    /// Create a builder from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not describe a valid
    /// portfolio.
    pub fn from_config(config: &PortfolioConfig) -> PortfolioResult<Self> {
        let portfolio = config.build_portfolio()?;
        Ok(Self::new(portfolio)
            .with_currency_symbol(config.currency_symbol.clone())
            .with_benchmark_config(config.benchmark.clone()))
    }

    /// Set the market signal source.
    #[must_use]
    pub fn with_signals(mut self, source: Arc<dyn MarketSignalSource>) -> Self {
        self.sources = self.sources.with_signals(source);
        self
    }

    /// Set the news source.
    #[must_use]
    pub fn with_news(mut self, source: Arc<dyn NewsSource>) -> Self {
        self.sources = self.sources.with_news(source);
        self
    }

    /// Set the benchmark source.
    #[must_use]
    pub fn with_benchmark(mut self, source: Arc<dyn BenchmarkSource>) -> Self {
        self.sources = self.sources.with_benchmark(source);
        self
    }

    /// Replace all collaborators at once.
    #[must_use]
    pub fn with_collaborators(mut self, sources: Collaborators) -> Self {
        self.sources = sources;
        self
    }

    /// Set the reference index shown in the market overview.
    #[must_use]
    pub fn with_benchmark_config(mut self, benchmark: Option<BenchmarkConfig>) -> Self {
        self.composer = self.composer.with_benchmark(benchmark);
        self
    }

    /// Set the currency symbol.
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.composer = self.composer.with_currency_symbol(symbol);
        self
    }

    /// Set the timestamp clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the improvement rule table.
    #[must_use]
    pub fn with_rules(mut self, rules: ImprovementRules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the engine with an empty history.
    #[must_use]
    pub fn build(self) -> CommentaryEngine {
        CommentaryEngine {
            portfolio: self.portfolio,
            composer: self.composer,
            sources: self.sources,
            rules: self.rules,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            history: Mutex::new(HistoryStore::new()),
        }
    }
}
