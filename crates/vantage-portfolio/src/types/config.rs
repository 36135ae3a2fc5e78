//! Serializable portfolio configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vantage_traits::Ticker;

use super::{Holding, SectorDefinition, SectorMap};
use crate::portfolio::{Portfolio, PortfolioBuilder};
use crate::PortfolioResult;

/// Reference index shown in the market overview line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Index symbol passed to the benchmark source (e.g. `^NSEI`).
    pub symbol: Ticker,
    /// Name printed in the report (e.g. "Nifty 50").
    pub display_name: String,
}

impl BenchmarkConfig {
    /// Creates a benchmark configuration.
    #[must_use]
    pub fn new(symbol: impl Into<Ticker>, display_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
        }
    }
}

/// One configured position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingConfig {
    /// Exchange ticker.
    pub ticker: Ticker,
    /// Display name.
    pub name: String,
    /// Share quantity.
    pub quantity: u64,
    /// Price paid per share.
    pub purchase_price: Decimal,
    /// Latest price per share.
    pub current_price: Decimal,
}

/// Portfolio configuration: ordered holdings plus the sector table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Portfolio name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Currency symbol prefixed to monetary amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Optional reference index.
    #[serde(default)]
    pub benchmark: Option<BenchmarkConfig>,

    /// Holdings in report order.
    #[serde(default)]
    pub holdings: Vec<HoldingConfig>,

    /// Sector table in declaration order.
    #[serde(default)]
    pub sectors: Vec<SectorDefinition>,
}

fn default_name() -> String {
    "Portfolio".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            currency_symbol: default_currency_symbol(),
            benchmark: None,
            holdings: Vec::new(),
            sectors: Vec::new(),
        }
    }
}

impl PortfolioConfig {
    /// Validates the configuration and builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if a holding is invalid, a ticker repeats, a ticker
    /// has no sector, or the sector table is inconsistent.
    pub fn build_portfolio(&self) -> PortfolioResult<Portfolio> {
        let holdings = self
            .holdings
            .iter()
            .map(|h| {
                Holding::builder()
                    .ticker(h.ticker.clone())
                    .name(h.name.clone())
                    .quantity(h.quantity)
                    .purchase_price(h.purchase_price)
                    .current_price(h.current_price)
                    .build()
            })
            .collect::<PortfolioResult<Vec<_>>>()?;

        PortfolioBuilder::new()
            .name(self.name.clone())
            .holdings(holdings)
            .sector_map(SectorMap::new(self.sectors.iter().cloned())?)
            .build()
    }
}
