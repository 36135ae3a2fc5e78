//! News source trait.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::TraitError;
use crate::ids::Ticker;

/// A single news item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline text
    pub title: String,
    /// Free-text body or description
    #[serde(default)]
    pub description: String,
    /// Publication time, in the publisher's own offset
    pub published_at: DateTime<FixedOffset>,
}

impl NewsItem {
    /// Create a new news item.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        published_at: impl Into<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            published_at: published_at.into(),
        }
    }

    /// Returns true if the headline or body mentions `symbol`.
    pub fn mentions(&self, symbol: &str) -> bool {
        self.title.contains(symbol) || self.description.contains(symbol)
    }
}

/// Trait for news providers.
///
/// Matching uses contains semantics against the ticker's
/// [base symbol](Ticker::base_symbol) across headline and body. Results may
/// be returned in any order.
pub trait NewsSource: Send + Sync {
    /// Get news items matching a ticker (possibly empty).
    fn fetch_news(&self, ticker: &Ticker) -> Result<Vec<NewsItem>, TraitError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_mentions() {
        let item = NewsItem::new(
            "TCS wins large deal",
            "The IT major signed a multi-year contract",
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 15, 0).unwrap(),
        );
        assert!(item.mentions("TCS"));
        assert!(item.mentions("multi-year"));
        assert!(!item.mentions("INFY"));
    }

    #[test]
    fn test_deserialize_without_description() {
        let json = r#"{"title":"ITC demerger","published_at":"2025-01-10T04:30:00Z"}"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "ITC demerger");
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_deserialize_keeps_publisher_offset() {
        let json = r#"{"title":"ITC results","published_at":"2025-03-13T02:00:00+05:30"}"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.published_at.offset().local_minus_utc(), 5 * 3600 + 1800);
        assert_eq!(item.published_at.date_naive().to_string(), "2025-03-13");
        assert_eq!(
            item.published_at,
            Utc.with_ymd_and_hms(2025, 3, 12, 20, 30, 0).unwrap()
        );
    }
}
