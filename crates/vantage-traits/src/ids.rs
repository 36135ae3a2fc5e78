//! Identifier types shared by the engine and its collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchange ticker, optionally qualified with an exchange suffix
/// (`RELIANCE.NS`, `^NSEI`).
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(pub String);

impl Ticker {
    /// Create a new ticker.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the ticker as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ticker with any exchange qualifier stripped.
    ///
    /// `RELIANCE.NS` becomes `RELIANCE`; an unqualified ticker is returned
    /// unchanged.
    pub fn base_symbol(&self) -> &str {
        match self.0.split_once('.') {
            Some((base, _)) => base,
            None => &self.0,
        }
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
