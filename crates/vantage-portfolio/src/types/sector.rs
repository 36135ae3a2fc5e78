//! Sector labels and the ticker → sector table.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use vantage_traits::Ticker;

use crate::{PortfolioError, PortfolioResult};

/// Sector label (e.g. "Banking").
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sector(String);

impl Sector {
    /// Creates a sector label.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the sector table: a label and the tickers it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorDefinition {
    /// Sector label.
    pub name: String,
    /// Tickers assigned to this sector.
    pub tickers: Vec<Ticker>,
}

impl SectorDefinition {
    /// Creates a sector definition.
    #[must_use]
    pub fn new<T: Into<Ticker>>(
        name: impl Into<String>,
        tickers: impl IntoIterator<Item = T>,
    ) -> Self {
        Self {
            name: name.into(),
            tickers: tickers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Declarative ticker → sector table.
///
/// Sectors keep their declaration order; every iteration over sectors in
/// this crate uses that order. A ticker belongs to at most one sector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectorMap {
    sectors: Vec<Sector>,
    lookup: HashMap<Ticker, usize>,
}

impl SectorMap {
    /// Builds the table from ordered definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if a sector name is blank or repeated, or if a ticker
    /// is listed under two different sectors.
    pub fn new(definitions: impl IntoIterator<Item = SectorDefinition>) -> PortfolioResult<Self> {
        let mut sectors: Vec<Sector> = Vec::new();
        let mut lookup: HashMap<Ticker, usize> = HashMap::new();

        for def in definitions {
            if def.name.trim().is_empty() {
                return Err(PortfolioError::invalid_config("sector name cannot be blank"));
            }
            if sectors.iter().any(|s| s.as_str() == def.name) {
                return Err(PortfolioError::invalid_config(format!(
                    "sector '{}' is defined twice",
                    def.name
                )));
            }

            let index = sectors.len();
            for ticker in def.tickers {
                if let Some(&existing) = lookup.get(&ticker) {
                    if existing != index {
                        return Err(PortfolioError::AmbiguousSector {
                            ticker: ticker.to_string(),
                            first: sectors[existing].to_string(),
                            second: def.name.clone(),
                        });
                    }
                    continue;
                }
                lookup.insert(ticker, index);
            }
            sectors.push(Sector::new(def.name));
        }

        Ok(Self { sectors, lookup })
    }

    /// Returns the sectors in declaration order.
    #[must_use]
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Returns the number of sectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    /// Returns true if no sectors are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Returns the declaration index of the ticker's sector.
    #[must_use]
    pub fn index_of(&self, ticker: &Ticker) -> Option<usize> {
        self.lookup.get(ticker).copied()
    }

    /// Returns the ticker's sector.
    #[must_use]
    pub fn resolve(&self, ticker: &Ticker) -> Option<&Sector> {
        self.index_of(ticker).map(|i| &self.sectors[i])
    }

    /// Returns the ticker's sector declaration index.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::UnmappedTicker`] if the ticker has no sector.
    pub fn require(&self, ticker: &Ticker) -> PortfolioResult<usize> {
        self.index_of(ticker)
            .ok_or_else(|| PortfolioError::unmapped(ticker.as_str()))
    }

    /// Returns all mapped tickers (unordered).
    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.lookup.keys()
    }
}
