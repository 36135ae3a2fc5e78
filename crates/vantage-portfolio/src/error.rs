//! Error types for portfolio construction.
//!
//! Only configuration problems are errors. Once a [`Portfolio`](crate::Portfolio)
//! exists, every analysis pass succeeds.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur while building a portfolio.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid holding data.
    #[error("Invalid holding '{id}': {reason}")]
    InvalidHolding {
        /// The holding ticker.
        id: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// The same ticker appears in two holdings.
    #[error("Duplicate holding for ticker '{ticker}'")]
    DuplicateTicker {
        /// The repeated ticker.
        ticker: String,
    },

    /// A holding's ticker is not assigned to any sector.
    #[error("Ticker '{ticker}' has no sector mapping")]
    UnmappedTicker {
        /// The unmapped ticker.
        ticker: String,
    },

    /// A ticker is listed under more than one sector.
    #[error("Ticker '{ticker}' is mapped to both '{first}' and '{second}'")]
    AmbiguousSector {
        /// The ticker.
        ticker: String,
        /// The sector it was first listed under.
        first: String,
        /// The conflicting sector.
        second: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// The reason the configuration is invalid.
        reason: String,
    },
}

impl PortfolioError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an unmapped ticker error.
    #[must_use]
    pub fn unmapped(ticker: impl Into<String>) -> Self {
        Self::UnmappedTicker {
            ticker: ticker.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::missing_field("ticker");
        assert!(err.to_string().contains("ticker"));

        let err = PortfolioError::invalid_holding("LT.NS", "quantity must be positive");
        assert!(err.to_string().contains("LT.NS"));
        assert!(err.to_string().contains("quantity must be positive"));

        let err = PortfolioError::unmapped("WIPRO.NS");
        assert_eq!(err.to_string(), "Ticker 'WIPRO.NS' has no sector mapping");
    }

    #[test]
    fn test_ambiguous_display() {
        let err = PortfolioError::AmbiguousSector {
            ticker: "ITC.NS".into(),
            first: "Consumer".into(),
            second: "Conglomerate".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Consumer"));
        assert!(msg.contains("Conglomerate"));
    }
}
