//! The commentary engine: `analyze()` / `improve()` over a fixed portfolio.
//!
//! The engine owns the portfolio, the collaborators and the process-lifetime
//! [`HistoryStore`]. Every call runs one full evaluation pass and appends
//! exactly one snapshot. Calls are serialized by a mutex held across the
//! whole pass, so concurrent callers never interleave history writes.

mod builder;

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

pub use builder::CommentaryEngineBuilder;

use crate::analytics::RiskHeatmap;
use crate::clock::Clock;
use crate::commentary::{AnalysisReport, Collaborators, CommentaryComposer};
use crate::history::{
    render_improvements, CommentarySnapshot, HistoryStore, ImprovementRules, SnapshotKind,
};
use crate::Portfolio;

/// Risk analysis and commentary engine.
pub struct CommentaryEngine {
    portfolio: Portfolio,
    composer: CommentaryComposer,
    sources: Collaborators,
    rules: ImprovementRules,
    clock: Arc<dyn Clock>,
    history: Mutex<HistoryStore>,
}

impl fmt::Debug for CommentaryEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommentaryEngine")
            .field("portfolio", &self.portfolio.name())
            .field("holdings", &self.portfolio.len())
            .field("sources", &self.sources)
            .field("history_len", &self.history.lock().len())
            .finish()
    }
}

impl CommentaryEngine {
    /// Create a builder for a validated portfolio.
    #[must_use]
    pub fn builder(portfolio: Portfolio) -> CommentaryEngineBuilder {
        CommentaryEngineBuilder::new(portfolio)
    }

    /// The analysed portfolio.
    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// The composer used for every pass.
    #[must_use]
    pub fn composer(&self) -> &CommentaryComposer {
        &self.composer
    }

    /// Runs an evaluation pass without touching history.
    #[must_use]
    pub fn evaluate(&self) -> AnalysisReport {
        self.composer.evaluate(&self.portfolio, &self.sources)
    }

    /// Per-sector risk scores from a fresh evaluation, in declaration order.
    #[must_use]
    pub fn risk_heatmap(&self) -> RiskHeatmap {
        self.evaluate().risk
    }

    /// Composes a fresh commentary and appends it to history.
    ///
    /// Never fails: collaborator problems only degrade the text.
    pub fn analyze(&self) -> CommentarySnapshot {
        let mut history = self.history.lock();
        self.record_analysis(&mut history)
    }

    /// Composes a fresh commentary annotated with improvements over all
    /// prior texts, and appends it to history.
    ///
    /// With an empty history this is the same as [`analyze`](Self::analyze).
    pub fn improve(&self) -> CommentarySnapshot {
        let mut history = self.history.lock();
        if history.is_empty() {
            return self.record_analysis(&mut history);
        }

        // Gaps come from prior texts only
        let bullets = self.rules.evaluate(&history.corpus());
        let mut text = self.compose();
        text.push_str(&render_improvements(&bullets));

        let count = bullets.len();
        let snapshot = history.record(self.clock.now(), text, SnapshotKind::Improved, bullets);

        info!(
            snapshot_id = snapshot.id.0,
            holdings = self.portfolio.len(),
            improvements = count,
            "improved analysis recorded"
        );
        snapshot
    }

    /// The most recently recorded snapshot.
    #[must_use]
    pub fn current(&self) -> Option<CommentarySnapshot> {
        self.history.lock().current().cloned()
    }

    /// Copy of the full history, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<CommentarySnapshot> {
        self.history.lock().to_vec()
    }

    /// Number of recorded snapshots.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.lock().len()
    }

    fn record_analysis(&self, history: &mut HistoryStore) -> CommentarySnapshot {
        let text = self.compose();
        let snapshot = history.record(self.clock.now(), text, SnapshotKind::Analysis, Vec::new());

        info!(
            snapshot_id = snapshot.id.0,
            holdings = self.portfolio.len(),
            improvements = 0,
            "analysis recorded"
        );
        snapshot
    }

    fn compose(&self) -> String {
        let report = self.evaluate();
        self.composer.render(&report)
    }
}
