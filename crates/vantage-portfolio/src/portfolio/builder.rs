//! Portfolio builder for fluent construction.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::types::{Holding, SectorDefinition, SectorMap};
use crate::{Portfolio, PortfolioError, PortfolioResult};

/// Builder for constructing a [`Portfolio`].
///
/// # Example
///
/// ```rust,ignore
/// use vantage_portfolio::prelude::*;
///
/// let portfolio = PortfolioBuilder::new()
///     .name("Core Equity")
///     .add_holding(reliance)
///     .add_sector(SectorDefinition::new("Conglomerate", ["RELIANCE.NS"]))
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    name: Option<String>,
    holdings: Vec<Holding>,
    sectors: Vec<SectorDefinition>,
    sector_map: Option<SectorMap>,
}

impl PortfolioBuilder {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a holding to the portfolio.
    #[must_use]
    pub fn add_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Adds multiple holdings to the portfolio.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = Holding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Sets all holdings (replacing any existing).
    #[must_use]
    pub fn holdings(mut self, holdings: Vec<Holding>) -> Self {
        self.holdings = holdings;
        self
    }

    /// Appends a sector definition.
    ///
    /// Ignored if a complete [`SectorMap`] is supplied via [`sector_map`](Self::sector_map).
    #[must_use]
    pub fn add_sector(mut self, definition: SectorDefinition) -> Self {
        self.sectors.push(definition);
        self
    }

    /// Sets a prebuilt sector table.
    #[must_use]
    pub fn sector_map(mut self, map: SectorMap) -> Self {
        self.sector_map = Some(map);
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sector definitions are inconsistent
    /// - Two holdings share a ticker
    /// - A holding's ticker has no sector
    pub fn build(self) -> PortfolioResult<Portfolio> {
        let name = self.name.unwrap_or_else(|| "Portfolio".to_string());

        let sector_map = match self.sector_map {
            Some(map) => map,
            None => SectorMap::new(self.sectors)?,
        };

        let mut seen = HashSet::with_capacity(self.holdings.len());
        let mut assignments = Vec::with_capacity(self.holdings.len());

        for holding in &self.holdings {
            if !seen.insert(holding.ticker.clone()) {
                return Err(PortfolioError::DuplicateTicker {
                    ticker: holding.ticker.to_string(),
                });
            }
            holding.check_range()?;
            assignments.push(sector_map.require(&holding.ticker)?);
        }

        check_totals(&self.holdings)?;

        Ok(Portfolio {
            name,
            holdings: self.holdings,
            sector_map,
            assignments,
        })
    }
}

/// Totals are summed with plain `+` later, so they must fit now.
fn check_totals(holdings: &[Holding]) -> PortfolioResult<()> {
    let sum = |amount: fn(&Holding) -> Decimal| {
        holdings
            .iter()
            .try_fold(Decimal::ZERO, |acc, h| acc.checked_add(amount(h)))
    };

    if sum(Holding::current_value).is_some()
        && sum(Holding::cost_basis).is_some()
        && sum(Holding::profit_loss).is_some()
    {
        Ok(())
    } else {
        Err(PortfolioError::invalid_config(
            "portfolio totals are out of range",
        ))
    }
}
