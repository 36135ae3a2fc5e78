//! Sector-based portfolio bucketing.
//!
//! Provides exposure analysis by sector and the concentration-risk check.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Sector;
use crate::Portfolio;

/// Exposure fraction above which a sector is concentrated.
pub const CONCENTRATION_THRESHOLD: f64 = 0.40;

/// Aggregated value for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBucket {
    /// Sector label.
    pub sector: Sector,

    /// Number of holdings in this sector.
    pub count: usize,

    /// Sum of current value across the sector's holdings.
    pub market_value: Decimal,

    /// Share of total portfolio value (0-1).
    pub exposure: f64,
}

impl SectorBucket {
    /// Returns true if this bucket holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the exposure as a percentage (0-100).
    #[must_use]
    pub fn exposure_pct(&self) -> f64 {
        self.exposure * 100.0
    }

    /// Returns true if the exposure exceeds [`CONCENTRATION_THRESHOLD`].
    #[must_use]
    pub fn is_concentrated(&self) -> bool {
        self.exposure > CONCENTRATION_THRESHOLD
    }
}

/// Distribution of portfolio value by sector.
///
/// Holds one bucket per defined sector, in declaration order, including
/// sectors with no holdings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorExposure {
    /// Buckets in sector declaration order.
    pub buckets: Vec<SectorBucket>,

    /// Total portfolio value.
    pub total_market_value: Decimal,
}

impl SectorExposure {
    /// Returns the bucket for a sector.
    #[must_use]
    pub fn get(&self, sector: &str) -> Option<&SectorBucket> {
        self.buckets.iter().find(|b| b.sector.as_str() == sector)
    }

    /// Returns the buckets that hold at least one position, in declaration order.
    pub fn populated(&self) -> impl Iterator<Item = &SectorBucket> {
        self.buckets.iter().filter(|b| !b.is_empty())
    }

    /// Returns the bucket with the largest aggregated value.
    ///
    /// Ties go to the sector declared first. Returns `None` when the
    /// portfolio holds nothing.
    #[must_use]
    pub fn largest(&self) -> Option<&SectorBucket> {
        let mut best: Option<&SectorBucket> = None;
        for bucket in self.populated() {
            match best {
                Some(b) if bucket.market_value <= b.market_value => {}
                _ => best = Some(bucket),
            }
        }
        best
    }

    /// Returns the largest bucket if it exceeds the concentration threshold.
    #[must_use]
    pub fn concentrated(&self) -> Option<&SectorBucket> {
        self.largest().filter(|b| b.is_concentrated())
    }

    /// Returns the sum of all exposure fractions (1.0 for a non-empty portfolio).
    #[must_use]
    pub fn total_exposure(&self) -> f64 {
        self.buckets.iter().map(|b| b.exposure).sum()
    }
}

/// Buckets a portfolio's holdings by sector.
#[must_use]
pub fn aggregate_sectors(portfolio: &Portfolio) -> SectorExposure {
    let sectors = portfolio.sector_map().sectors();
    let mut values = vec![Decimal::ZERO; sectors.len()];
    let mut counts = vec![0usize; sectors.len()];

    for (holding, sector) in portfolio.iter_with_sector() {
        values[sector] += holding.current_value();
        counts[sector] += 1;
    }

    let total_mv: Decimal = values.iter().copied().sum();

    let buckets = sectors
        .iter()
        .zip(values)
        .zip(counts)
        .map(|((sector, market_value), count)| SectorBucket {
            sector: sector.clone(),
            count,
            market_value,
            exposure: exposure_fraction(market_value, total_mv),
        })
        .collect();

    SectorExposure {
        buckets,
        total_market_value: total_mv,
    }
}

fn exposure_fraction(value: Decimal, total: Decimal) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    (value / total).to_f64().unwrap_or(0.0)
}
