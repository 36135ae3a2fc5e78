//! Portfolio struct and core methods.

use rust_decimal::Decimal;
use vantage_traits::Ticker;

use crate::types::{Holding, Sector, SectorMap};

/// An equity portfolio with every holding resolved to a sector.
///
/// Only [`PortfolioBuilder`](super::PortfolioBuilder) constructs this type,
/// so the sector assignment is always total.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub(super) name: String,
    pub(super) holdings: Vec<Holding>,
    pub(super) sector_map: SectorMap,
    /// Sector declaration index per holding, parallel to `holdings`.
    pub(super) assignments: Vec<usize>,
}

impl Portfolio {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> super::PortfolioBuilder {
        super::PortfolioBuilder::new().name(name)
    }

    /// Returns the portfolio name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the holdings in configured order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Returns the sector table.
    #[must_use]
    pub fn sector_map(&self) -> &SectorMap {
        &self.sector_map
    }

    /// Returns the sector declaration index of the holding at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn sector_index(&self, index: usize) -> usize {
        self.assignments[index]
    }

    /// Returns the sector of the holding at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn sector_of(&self, index: usize) -> &Sector {
        &self.sector_map.sectors()[self.assignments[index]]
    }

    /// Iterates holdings together with their sector declaration index.
    pub fn iter_with_sector(&self) -> impl Iterator<Item = (&Holding, usize)> {
        self.holdings.iter().zip(self.assignments.iter().copied())
    }

    /// Looks up a holding by ticker.
    #[must_use]
    pub fn get(&self, ticker: &Ticker) -> Option<&Holding> {
        self.holdings.iter().find(|h| &h.ticker == ticker)
    }

    /// Returns the total current value of all holdings.
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.holdings.iter().map(Holding::current_value).sum()
    }

    /// Returns the total cost basis of all holdings.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.holdings.iter().map(Holding::cost_basis).sum()
    }

    /// Returns the total profit/loss of all holdings.
    #[must_use]
    pub fn total_profit_loss(&self) -> Decimal {
        self.holdings.iter().map(Holding::profit_loss).sum()
    }
}
