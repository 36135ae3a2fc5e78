//! Commentary composer.

use std::fmt::{self, Write as _};

use tracing::debug;
use vantage_traits::MarketSignal;

use super::format::{format_currency, profit_label, truncate_chars};
use super::{AnalysisReport, BenchmarkMove, Collaborators, Headline, HoldingReport};
use crate::analytics::{calculate_holding_metrics, is_overbought, score_sectors, Momentum};
use crate::bucketing::aggregate_sectors;
use crate::types::BenchmarkConfig;
use crate::Portfolio;

/// Maximum headline characters quoted per holding.
pub const HEADLINE_CHARS: usize = 100;

/// Builds analysis reports and renders them as markdown commentary.
#[derive(Debug, Clone)]
pub struct CommentaryComposer {
    currency_symbol: String,
    benchmark: Option<BenchmarkConfig>,
}

impl Default for CommentaryComposer {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            benchmark: None,
        }
    }
}

impl CommentaryComposer {
    /// Creates a composer with the default currency symbol and no benchmark.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the currency symbol.
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Sets the reference index for the market overview line.
    #[must_use]
    pub fn with_benchmark(mut self, benchmark: Option<BenchmarkConfig>) -> Self {
        self.benchmark = benchmark;
        self
    }

    /// Returns the currency symbol.
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Runs one full evaluation pass.
    ///
    /// Each collaborator is queried once per holding, serially, in holding
    /// order. Collaborator failures degrade only the affected holding.
    #[must_use]
    pub fn evaluate(&self, portfolio: &Portfolio, sources: &Collaborators) -> AnalysisReport {
        let benchmark = self.benchmark.as_ref().and_then(|cfg| {
            let session = sources.benchmark_session(&cfg.symbol)?;
            Some(BenchmarkMove {
                display_name: cfg.display_name.clone(),
                change_pct: session.change_pct()?,
            })
        });

        let mut signals: Vec<Option<MarketSignal>> = Vec::with_capacity(portfolio.len());
        let mut holdings = Vec::with_capacity(portfolio.len());

        for holding in portfolio.holdings() {
            let signal = sources.signal(&holding.ticker);
            let news = sources.news(&holding.ticker);

            holdings.push(HoldingReport {
                metrics: calculate_holding_metrics(holding, signal.as_ref()),
                headline: Headline::latest(&news),
            });
            signals.push(signal);
        }

        // Read straight from the signals rather than the per-holding classification
        let overbought = portfolio
            .holdings()
            .iter()
            .zip(&signals)
            .filter(|(_, signal)| signal.as_ref().is_some_and(|s| is_overbought(s.momentum)))
            .map(|(h, _)| h.name.clone())
            .collect();

        let metrics: Vec<_> = holdings.iter().map(|h| h.metrics.clone()).collect();
        let exposure = aggregate_sectors(portfolio);
        let risk = score_sectors(portfolio, &metrics);

        debug!(
            holdings = holdings.len(),
            benchmark = benchmark.is_some(),
            "evaluation complete"
        );

        AnalysisReport {
            benchmark,
            holdings,
            exposure,
            risk,
            total_profit_loss: portfolio.total_profit_loss(),
            overbought,
        }
    }

    /// Renders a report as markdown.
    #[must_use]
    pub fn render(&self, report: &AnalysisReport) -> String {
        RenderedReport {
            report,
            currency: &self.currency_symbol,
        }
        .to_string()
    }
}

struct RenderedReport<'a> {
    report: &'a AnalysisReport,
    currency: &'a str,
}

impl RenderedReport<'_> {
    fn write_holding(&self, f: &mut fmt::Formatter<'_>, h: &HoldingReport) -> fmt::Result {
        let m = &h.metrics;
        let arrow = if m.percent_change >= 0.0 { '↑' } else { '↓' };

        write!(
            f,
            "- **{} ({})**: {} {:.2}% since purchase ({} {})",
            m.name,
            m.ticker,
            arrow,
            m.percent_change.abs(),
            format_currency(self.currency, m.profit_loss),
            profit_label(m.profit_loss),
        )?;

        if let Momentum::Available { value, class } = m.momentum {
            write!(f, ", RSI: {value:.1}")?;
            let label = class.label();
            if !label.is_empty() {
                write!(f, " {label}")?;
            }
        }

        if let Some(headline) = &h.headline {
            write!(
                f,
                "\n  - *News*: {}... (Published: {})",
                truncate_chars(&headline.title, HEADLINE_CHARS),
                headline.published_at.format("%Y-%m-%d"),
            )?;
        }

        f.write_char('\n')
    }
}

impl fmt::Display for RenderedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        f.write_str("## Portfolio Performance Summary\n\n")?;

        if let Some(b) = &report.benchmark {
            let direction = if b.change_pct >= 0.0 { "up" } else { "down" };
            write!(
                f,
                "**Market Overview**: {} is {} {:.2}% today.\n\n",
                b.display_name,
                direction,
                b.change_pct.abs()
            )?;
        }

        f.write_str("### Key Holdings Performance\n")?;
        for h in &report.holdings {
            self.write_holding(f, h)?;
        }

        f.write_str("\n### Sector Exposure\n")?;
        for bucket in report.exposure.populated() {
            writeln!(f, "- **{}**: {:.1}%", bucket.sector, bucket.exposure_pct())?;
        }

        f.write_str("\n### Risk Assessment\n")?;
        writeln!(
            f,
            "- **Total Portfolio**: {} {}",
            format_currency(self.currency, report.total_profit_loss),
            profit_label(report.total_profit_loss)
        )?;

        if let Some(bucket) = report.exposure.concentrated() {
            writeln!(
                f,
                "- ⚠️ **Concentration Risk**: Overexposed to {} sector ({:.1}%)",
                bucket.sector,
                bucket.exposure_pct()
            )?;
        }

        if !report.overbought.is_empty() {
            writeln!(
                f,
                "- ⚠️ **Valuation Risk**: {} appear overbought (RSI > 70)",
                report.overbought.join(", ")
            )?;
        }

        Ok(())
    }
}
