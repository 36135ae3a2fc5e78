//! Equity holding representation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vantage_traits::Ticker;

use crate::{PortfolioError, PortfolioResult};

/// A single equity position.
///
/// Immutable for the lifetime of a run. Value and P/L are derived on
/// demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Exchange ticker, unique within a portfolio.
    pub ticker: Ticker,

    /// Display name.
    pub name: String,

    /// Number of shares held.
    pub quantity: u64,

    /// Price paid per share.
    pub purchase_price: Decimal,

    /// Latest price per share.
    pub current_price: Decimal,
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Returns quantity × current price.
    #[must_use]
    pub fn current_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.current_price
    }

    /// Returns quantity × purchase price.
    #[must_use]
    pub fn cost_basis(&self) -> Decimal {
        Decimal::from(self.quantity) * self.purchase_price
    }

    /// Returns quantity × (current price − purchase price).
    #[must_use]
    pub fn profit_loss(&self) -> Decimal {
        Decimal::from(self.quantity) * (self.current_price - self.purchase_price)
    }

    /// Returns the price change since purchase, in percent (5.0 for +5%).
    #[must_use]
    pub fn percent_change(&self) -> f64 {
        // purchase_price > 0 is enforced by the builder
        let change = (self.current_price - self.purchase_price) / self.purchase_price
            * Decimal::ONE_HUNDRED;
        change.to_f64().unwrap_or(0.0)
    }

    /// Returns true if the position is at or above its purchase price.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.current_price >= self.purchase_price
    }

    /// Checks that value, cost, P/L and percent change fit in a `Decimal`.
    ///
    /// The accessors above use plain arithmetic; every holding accepted by
    /// [`HoldingBuilder`] or [`PortfolioBuilder`](crate::PortfolioBuilder)
    /// has passed this check.
    pub(crate) fn check_range(&self) -> PortfolioResult<()> {
        let quantity = Decimal::from(self.quantity);
        let change = self.current_price.checked_sub(self.purchase_price);

        let fits = quantity.checked_mul(self.current_price).is_some()
            && quantity.checked_mul(self.purchase_price).is_some()
            && change.and_then(|c| quantity.checked_mul(c)).is_some()
            && change
                .and_then(|c| c.checked_div(self.purchase_price))
                .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
                .is_some();

        if fits {
            Ok(())
        } else {
            Err(PortfolioError::invalid_holding(
                self.ticker.as_str(),
                "quantity and prices are out of range",
            ))
        }
    }
}

/// Builder for constructing a Holding.
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    ticker: Option<Ticker>,
    name: Option<String>,
    quantity: Option<u64>,
    purchase_price: Option<Decimal>,
    current_price: Option<Decimal>,
}

impl HoldingBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ticker.
    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<Ticker>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the share quantity.
    #[must_use]
    pub fn quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the purchase price per share.
    #[must_use]
    pub fn purchase_price(mut self, price: Decimal) -> Self {
        self.purchase_price = Some(price);
        self
    }

    /// Sets the current price per share.
    #[must_use]
    pub fn current_price(mut self, price: Decimal) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Builds the holding.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the quantity is zero,
    /// either price is not positive, or the derived amounts overflow.
    pub fn build(self) -> PortfolioResult<Holding> {
        let ticker = self
            .ticker
            .ok_or_else(|| PortfolioError::missing_field("ticker"))?;

        let name = self.name.unwrap_or_else(|| ticker.to_string());

        let quantity = self
            .quantity
            .ok_or_else(|| PortfolioError::missing_field("quantity"))?;

        let purchase_price = self
            .purchase_price
            .ok_or_else(|| PortfolioError::missing_field("purchase_price"))?;

        let current_price = self
            .current_price
            .ok_or_else(|| PortfolioError::missing_field("current_price"))?;

        if ticker.as_str().trim().is_empty() {
            return Err(PortfolioError::invalid_holding(
                ticker.as_str(),
                "ticker cannot be blank",
            ));
        }

        if quantity == 0 {
            return Err(PortfolioError::invalid_holding(
                ticker.as_str(),
                "quantity must be positive",
            ));
        }

        if purchase_price <= Decimal::ZERO {
            return Err(PortfolioError::invalid_holding(
                ticker.as_str(),
                "purchase_price must be positive",
            ));
        }

        if current_price <= Decimal::ZERO {
            return Err(PortfolioError::invalid_holding(
                ticker.as_str(),
                "current_price must be positive",
            ));
        }

        let holding = Holding {
            ticker,
            name,
            quantity,
            purchase_price,
            current_price,
        };
        holding.check_range()?;
        Ok(holding)
    }
}
