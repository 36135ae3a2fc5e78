//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;
use vantage_portfolio::PortfolioError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read.
    #[error("Cannot read configuration {path}: {source}")]
    ConfigRead {
        /// The configuration path.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured portfolio is invalid.
    #[error("Invalid portfolio: {0}")]
    Portfolio(#[from] PortfolioError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
