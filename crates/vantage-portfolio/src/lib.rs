//! # Vantage Portfolio
//!
//! Risk analysis and commentary generation for equity portfolios.
//!
//! Given a fixed set of holdings, a declarative sector table and optional
//! market signal, news and benchmark collaborators, this crate derives
//! per-holding profit/loss and momentum, sector exposure and concentration
//! risk, per-sector risk scores, and renders them as a markdown commentary.
//! Every commentary is kept in an append-only history, and an "improved"
//! pass annotates a fresh commentary with gaps found in the earlier ones.
//!
//! ## Design Philosophy
//!
//! - **Pure calculations**: metrics, bucketing and risk scoring take explicit
//!   inputs and never fail for a validated [`Portfolio`]
//! - **Validated once**: configuration errors surface at portfolio
//!   construction; nothing later returns an error
//! - **Degrade, don't fail**: a failing collaborator only removes the affected
//!   report lines
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vantage_portfolio::prelude::*;
//!
//! let portfolio = PortfolioBuilder::new()
//!     .name("Core")
//!     .add_holding(holding)
//!     .add_sector(SectorDefinition::new("Technology", ["TCS.NS"]))
//!     .build()?;
//!
//! let engine = CommentaryEngine::builder(portfolio)
//!     .with_signals(signals)
//!     .with_news(news)
//!     .build();
//!
//! let first = engine.analyze();
//! let revised = engine.improve();
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Per-holding metrics and sector risk scores
//! - [`bucketing`] - Sector exposure and concentration
//! - [`commentary`] - Evaluation pass and markdown rendering
//! - [`history`] - Snapshots, history store and improvement rules
//! - [`engine`] - The `analyze()` / `improve()` service surface
//! - [`portfolio`] - Portfolio and builder types
//! - [`types`] - Holdings, sectors and configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod bucketing;
pub mod clock;
pub mod commentary;
pub mod engine;
pub mod error;
pub mod history;
pub mod portfolio;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

pub use types::{
    BenchmarkConfig, Holding, HoldingBuilder, HoldingConfig, PortfolioConfig, Sector,
    SectorDefinition, SectorMap,
};

pub use portfolio::{Portfolio, PortfolioBuilder};

pub use analytics::{
    calculate_holding_metrics, is_overbought, is_oversold, score_sectors, sector_risk_score,
    HoldingMetrics, Momentum, MomentumClass, RiskHeatmap, RiskInput, SectorRisk,
};

pub use bucketing::{aggregate_sectors, SectorBucket, SectorExposure, CONCENTRATION_THRESHOLD};

pub use commentary::{
    AnalysisReport, BenchmarkMove, Collaborators, CommentaryComposer, Headline, HoldingReport,
};

pub use history::{
    CommentarySnapshot, HistoryCorpus, HistoryStore, ImprovementRule, ImprovementRules,
    SnapshotId, SnapshotKind,
};

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{CommentaryEngine, CommentaryEngineBuilder};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use vantage_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};

    pub use crate::types::{
        BenchmarkConfig, Holding, HoldingBuilder, PortfolioConfig, Sector, SectorDefinition,
    };

    pub use crate::portfolio::{Portfolio, PortfolioBuilder};

    pub use crate::analytics::{HoldingMetrics, Momentum, MomentumClass, RiskHeatmap};
    pub use crate::bucketing::SectorExposure;
    pub use crate::commentary::{AnalysisReport, Collaborators};
    pub use crate::engine::{CommentaryEngine, CommentaryEngineBuilder};
    pub use crate::history::{CommentarySnapshot, SnapshotKind};

    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
    pub use vantage_traits::{
        BenchmarkSource, MarketSignal, MarketSignalSource, NewsItem, NewsSource, Ticker,
    };
}
