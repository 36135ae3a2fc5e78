//! Heuristic gap detection over prior commentary.
//!
//! Each rule inspects the whole history as one corpus and, when its
//! condition holds, contributes one bullet to the improvement section.
//! Rules run in a fixed order and do not interact.

use std::fmt;

/// All prior commentary texts joined with newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryCorpus {
    text: String,
    lowered: String,
}

impl HistoryCorpus {
    /// Joins texts, oldest first, with newlines.
    pub fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let text = texts.into_iter().collect::<Vec<_>>().join("\n");
        let lowered = text.to_lowercase();
        Self { text, lowered }
    }

    /// The joined text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-sensitive substring test.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// Case-insensitive substring test.
    #[must_use]
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.lowered.contains(&needle.to_lowercase())
    }

    /// Returns true if there is no prior text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A single gap detector.
#[derive(Clone, Copy)]
pub struct ImprovementRule {
    /// Short identifier.
    pub name: &'static str,
    /// Bullet text emitted when the rule fires.
    pub bullet: &'static str,
    /// Condition over the history corpus.
    pub applies: fn(&HistoryCorpus) -> bool,
}

impl fmt::Debug for ImprovementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImprovementRule")
            .field("name", &self.name)
            .field("bullet", &self.bullet)
            .finish()
    }
}

fn mentions_concentration(corpus: &HistoryCorpus) -> bool {
    corpus.contains("Concentration Risk")
}

fn momentum_without_trend(corpus: &HistoryCorpus) -> bool {
    corpus.contains("RSI") && !corpus.contains("MACD")
}

fn lacks_dividend(corpus: &HistoryCorpus) -> bool {
    !corpus.contains_ignore_case("dividend")
}

/// Sector breakdown follow-up for past concentration warnings.
pub const SECTOR_BREAKDOWN: ImprovementRule = ImprovementRule {
    name: "sector_breakdown",
    bullet: "Added more detailed sector breakdown",
    applies: mentions_concentration,
};

/// Trend analysis when only momentum has been discussed.
pub const MACD_ANALYSIS: ImprovementRule = ImprovementRule {
    name: "macd_analysis",
    bullet: "Added MACD analysis",
    applies: momentum_without_trend,
};

/// Income analysis when dividends were never mentioned.
pub const DIVIDEND_ANALYSIS: ImprovementRule = ImprovementRule {
    name: "dividend_analysis",
    bullet: "Added dividend yield analysis",
    applies: lacks_dividend,
};

/// Ordered rule table.
#[derive(Debug, Clone)]
pub struct ImprovementRules {
    rules: Vec<ImprovementRule>,
}

impl Default for ImprovementRules {
    fn default() -> Self {
        Self {
            rules: vec![SECTOR_BREAKDOWN, MACD_ANALYSIS, DIVIDEND_ANALYSIS],
        }
    }
}

impl ImprovementRules {
    /// Creates a table from rules in evaluation order.
    #[must_use]
    pub fn new(rules: Vec<ImprovementRule>) -> Self {
        Self { rules }
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[ImprovementRule] {
        &self.rules
    }

    /// Bullets of every rule that fires, in table order.
    #[must_use]
    pub fn evaluate(&self, corpus: &HistoryCorpus) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| (rule.applies)(corpus))
            .map(|rule| rule.bullet.to_string())
            .collect()
    }
}

/// Renders the improvement section appended to an improved commentary.
///
/// Returns an empty string when there are no bullets.
#[must_use]
pub fn render_improvements(bullets: &[String]) -> String {
    if bullets.is_empty() {
        return String::new();
    }
    let mut section = String::from("\n### Commentary Improvements\nThis analysis incorporates:\n");
    for bullet in bullets {
        section.push_str("- ");
        section.push_str(bullet);
        section.push('\n');
    }
    section
}
