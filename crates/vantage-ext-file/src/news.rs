//! JSON news feed source.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use vantage_traits::{NewsItem, NewsSource, Ticker, TraitError};

/// JSON-based news source.
///
/// The file holds an array of `{title, description, published_at}` objects
/// (`published_at` as RFC 3339). It is read on every request; items whose
/// headline or body contains the ticker's base symbol are returned in file
/// order.
pub struct JsonNewsSource {
    file_path: PathBuf,
}

impl JsonNewsSource {
    /// Create a new JSON news source.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load every item in the feed.
    pub fn load(&self) -> Result<Vec<NewsItem>, TraitError> {
        if !self.file_path.exists() {
            return Ok(vec![]); // Empty source
        }

        let content = fs::read_to_string(&self.file_path)?;
        let items: Vec<NewsItem> =
            serde_json::from_str(&content).map_err(|e| TraitError::ParseError(e.to_string()))?;

        debug!(path = %self.file_path.display(), items = items.len(), "loaded news feed");
        Ok(items)
    }
}

impl NewsSource for JsonNewsSource {
    fn fetch_news(&self, ticker: &Ticker) -> Result<Vec<NewsItem>, TraitError> {
        let symbol = ticker.base_symbol();
        Ok(self
            .load()?
            .into_iter()
            .filter(|item| item.mentions(symbol))
            .collect())
    }
}

/// Empty news source.
pub struct EmptyNewsSource;

impl NewsSource for EmptyNewsSource {
    fn fetch_news(&self, _ticker: &Ticker) -> Result<Vec<NewsItem>, TraitError> {
        Ok(vec![])
    }
}
