//! Structured result of one analysis pass.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vantage_traits::NewsItem;

use crate::analytics::{HoldingMetrics, RiskHeatmap};
use crate::bucketing::SectorExposure;

/// Move of the reference index over its latest session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMove {
    /// Index name as printed.
    pub display_name: String,
    /// Open-to-close change in percent.
    pub change_pct: f64,
}

/// Most recent headline for a holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    /// Full headline text.
    pub title: String,
    /// Publication time in the publisher's offset; ordering is by instant.
    pub published_at: DateTime<FixedOffset>,
}

impl Headline {
    /// Picks the most recently published item; the earliest listed wins ties.
    #[must_use]
    pub fn latest(items: &[NewsItem]) -> Option<Self> {
        let mut latest: Option<&NewsItem> = None;
        for item in items {
            match latest {
                Some(l) if item.published_at <= l.published_at => {}
                _ => latest = Some(item),
            }
        }
        latest.map(|item| Self {
            title: item.title.clone(),
            published_at: item.published_at,
        })
    }
}

/// Per-holding section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingReport {
    /// Calculated metrics.
    pub metrics: HoldingMetrics,
    /// Latest headline, if the news source returned any.
    pub headline: Option<Headline>,
}

/// Everything one analysis pass computed, before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Reference index move, if available.
    pub benchmark: Option<BenchmarkMove>,
    /// Holdings in configured order.
    pub holdings: Vec<HoldingReport>,
    /// Sector exposure.
    pub exposure: SectorExposure,
    /// Sector risk scores.
    pub risk: RiskHeatmap,
    /// Total profit/loss across holdings.
    pub total_profit_loss: Decimal,
    /// Display names of holdings whose momentum reading exceeds 70.
    pub overbought: Vec<String>,
}

impl AnalysisReport {
    /// Number of holdings that had no market signal.
    #[must_use]
    pub fn missing_signals(&self) -> usize {
        self.holdings
            .iter()
            .filter(|h| !h.metrics.momentum.is_available())
            .count()
    }
}
