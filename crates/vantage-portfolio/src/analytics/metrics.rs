//! Metrics calculator.
//!
//! Turns one [`Holding`] plus its optional [`MarketSignal`] into the derived
//! numbers the commentary is built from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vantage_traits::{MarketSignal, Ticker};

use crate::types::Holding;

/// Momentum reading above which a holding is overbought.
pub const OVERBOUGHT_THRESHOLD: f64 = 70.0;

/// Momentum reading below which a holding is oversold.
pub const OVERSOLD_THRESHOLD: f64 = 30.0;

/// Returns true if a momentum reading is strictly above the overbought threshold.
#[must_use]
pub fn is_overbought(momentum: f64) -> bool {
    momentum > OVERBOUGHT_THRESHOLD
}

/// Returns true if a momentum reading is strictly below the oversold threshold.
#[must_use]
pub fn is_oversold(momentum: f64) -> bool {
    momentum < OVERSOLD_THRESHOLD
}

/// Overbought/oversold classification of a momentum reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumClass {
    /// Reading above 70.
    Overbought,
    /// Reading below 30.
    Oversold,
    /// Anything in between, or no reading at all.
    Neutral,
}

impl MomentumClass {
    /// Classifies a momentum reading.
    #[must_use]
    pub fn classify(momentum: f64) -> Self {
        if is_overbought(momentum) {
            Self::Overbought
        } else if is_oversold(momentum) {
            Self::Oversold
        } else {
            Self::Neutral
        }
    }

    /// Report label; empty for neutral.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overbought => "(Overbought)",
            Self::Oversold => "(Oversold)",
            Self::Neutral => "",
        }
    }
}

/// Momentum indicator for one holding, or the explicit absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Momentum {
    /// The signal source returned a reading.
    Available {
        /// Indicator value in [0, 100].
        value: f64,
        /// Classification of the value.
        class: MomentumClass,
    },
    /// No signal was available for the ticker.
    Unavailable,
}

impl Momentum {
    /// Builds the reading from an optional signal.
    #[must_use]
    pub fn from_signal(signal: Option<&MarketSignal>) -> Self {
        match signal {
            Some(s) => Self::Available {
                value: s.momentum,
                class: MomentumClass::classify(s.momentum),
            },
            None => Self::Unavailable,
        }
    }

    /// Returns the indicator value, if any.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Available { value, .. } => Some(*value),
            Self::Unavailable => None,
        }
    }

    /// Returns the classification; [`MomentumClass::Neutral`] when unavailable.
    #[must_use]
    pub fn class(&self) -> MomentumClass {
        match self {
            Self::Available { class, .. } => *class,
            Self::Unavailable => MomentumClass::Neutral,
        }
    }

    /// Returns true if a reading exists.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// Derived numbers for one holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingMetrics {
    /// Holding ticker.
    pub ticker: Ticker,
    /// Display name.
    pub name: String,
    /// Quantity × current price.
    pub current_value: Decimal,
    /// Quantity × (current − purchase).
    pub profit_loss: Decimal,
    /// Percent change since purchase (5.0 for +5%).
    pub percent_change: f64,
    /// Momentum indicator reading.
    pub momentum: Momentum,
}

impl HoldingMetrics {
    /// Returns true if the position is at or above its purchase price.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.profit_loss >= Decimal::ZERO
    }

    /// Returns the momentum classification.
    #[must_use]
    pub fn classification(&self) -> MomentumClass {
        self.momentum.class()
    }
}

/// Calculates the metrics for one holding.
///
/// Never fails for a holding produced by [`HoldingBuilder`](crate::types::HoldingBuilder).
#[must_use]
pub fn calculate_holding_metrics(
    holding: &Holding,
    signal: Option<&MarketSignal>,
) -> HoldingMetrics {
    HoldingMetrics {
        ticker: holding.ticker.clone(),
        name: holding.name.clone(),
        current_value: holding.current_value(),
        profit_loss: holding.profit_loss(),
        percent_change: holding.percent_change(),
        momentum: Momentum::from_signal(signal),
    }
}
