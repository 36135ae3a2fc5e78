//! Sector risk scoring.
//!
//! Each holding contributes:
//!
//! - losing position: `|percent change| × (momentum / 50)`
//! - otherwise: `momentum / 70`
//!
//! with momentum defaulting to 50 when no reading exists. A sector's score
//! is the mean contribution over its holdings, 0 for a sector with none.
//! Scores are unitless and meant for relative comparison only.

use serde::{Deserialize, Serialize};

use super::HoldingMetrics;
use crate::types::Sector;
use crate::Portfolio;

/// Momentum assumed when no reading is available.
pub const NEUTRAL_MOMENTUM: f64 = 50.0;

/// Momentum divisor applied to losing positions.
pub const LOSS_MOMENTUM_DIVISOR: f64 = 50.0;

/// Momentum divisor applied to flat or winning positions.
pub const GAIN_MOMENTUM_DIVISOR: f64 = 70.0;

/// One holding's input to the risk score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskInput {
    /// Percent change since purchase.
    pub percent_change: f64,
    /// Momentum reading, if any.
    pub momentum: Option<f64>,
}

impl RiskInput {
    /// Creates a risk input.
    #[must_use]
    pub fn new(percent_change: f64, momentum: Option<f64>) -> Self {
        Self {
            percent_change,
            momentum,
        }
    }

    /// Returns this holding's risk contribution.
    #[must_use]
    pub fn contribution(&self) -> f64 {
        let momentum = self.momentum.unwrap_or(NEUTRAL_MOMENTUM);
        if self.percent_change < 0.0 {
            self.percent_change.abs() * (momentum / LOSS_MOMENTUM_DIVISOR)
        } else {
            momentum / GAIN_MOMENTUM_DIVISOR
        }
    }
}

impl From<&HoldingMetrics> for RiskInput {
    fn from(m: &HoldingMetrics) -> Self {
        Self::new(m.percent_change, m.momentum.value())
    }
}

/// Mean contribution over a sector's holdings; 0 for an empty slice.
#[must_use]
pub fn sector_risk_score(inputs: &[RiskInput]) -> f64 {
    if inputs.is_empty() {
        return 0.0;
    }
    let total: f64 = inputs.iter().map(RiskInput::contribution).sum();
    total / inputs.len() as f64
}

/// Risk score for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorRisk {
    /// Sector label.
    pub sector: Sector,
    /// Mean contribution.
    pub score: f64,
    /// Number of holdings scored.
    pub holdings: usize,
}

/// Risk scores for every defined sector, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskHeatmap {
    entries: Vec<SectorRisk>,
}

impl RiskHeatmap {
    /// Returns all entries in sector declaration order.
    #[must_use]
    pub fn entries(&self) -> &[SectorRisk] {
        &self.entries
    }

    /// Returns the score for a sector.
    #[must_use]
    pub fn score(&self, sector: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.sector.as_str() == sector)
            .map(|e| e.score)
    }

    /// Returns the highest score (0 if there are no entries).
    #[must_use]
    pub fn max_score(&self) -> f64 {
        self.entries.iter().map(|e| e.score).fold(0.0, f64::max)
    }

    /// Returns the number of sectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no sectors are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scores every sector of `portfolio`.
///
/// `metrics` must be parallel to `portfolio.holdings()`.
#[must_use]
pub fn score_sectors(portfolio: &Portfolio, metrics: &[HoldingMetrics]) -> RiskHeatmap {
    let sectors = portfolio.sector_map().sectors();
    let mut grouped: Vec<Vec<RiskInput>> = vec![Vec::new(); sectors.len()];

    for ((_, sector), m) in portfolio.iter_with_sector().zip(metrics) {
        grouped[sector].push(RiskInput::from(m));
    }

    let entries = sectors
        .iter()
        .zip(grouped)
        .map(|(sector, inputs)| SectorRisk {
            sector: sector.clone(),
            score: sector_risk_score(&inputs),
            holdings: inputs.len(),
        })
        .collect();

    RiskHeatmap { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_losing_contribution() {
        // 10 × (50 / 50)
        assert_relative_eq!(RiskInput::new(-10.0, Some(50.0)).contribution(), 10.0);
        // 4 × (75 / 50)
        assert_relative_eq!(RiskInput::new(-4.0, Some(75.0)).contribution(), 6.0);
    }

    #[test]
    fn test_winning_contribution() {
        assert_relative_eq!(RiskInput::new(5.0, Some(70.0)).contribution(), 1.0);
        assert_relative_eq!(RiskInput::new(12.0, Some(35.0)).contribution(), 0.5);
        // Flat counts as non-negative
        assert_relative_eq!(RiskInput::new(0.0, Some(14.0)).contribution(), 0.2);
    }

    #[test]
    fn test_missing_momentum_defaults_to_neutral() {
        assert_relative_eq!(RiskInput::new(-10.0, None).contribution(), 10.0);
        assert_relative_eq!(RiskInput::new(3.0, None).contribution(), 50.0 / 70.0);
    }

    #[test]
    fn test_sector_mean() {
        let inputs = [RiskInput::new(2.0, Some(70.0)), RiskInput::new(-10.0, Some(50.0))];
        // (1 + 10) / 2
        assert_relative_eq!(sector_risk_score(&inputs), 5.5);
    }

    #[test]
    fn test_empty_sector_scores_zero() {
        assert_eq!(sector_risk_score(&[]), 0.0);
    }

    #[test]
    fn test_all_gains_is_mean_of_momentum_over_70() {
        let inputs = [
            RiskInput::new(1.0, Some(40.0)),
            RiskInput::new(8.0, Some(60.0)),
            RiskInput::new(3.0, Some(80.0)),
        ];
        let expected = (40.0 / 70.0 + 60.0 / 70.0 + 80.0 / 70.0) / 3.0;
        assert_relative_eq!(sector_risk_score(&inputs), expected, epsilon = 1e-12);
    }
}
