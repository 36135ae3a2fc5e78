//! Commentary composition.
//!
//! A composition pass has two halves:
//!
//! 1. [`CommentaryComposer::evaluate`] queries the collaborators once per
//!    holding and runs the metrics calculator, sector aggregator and risk
//!    scorer, producing an [`AnalysisReport`].
//! 2. [`CommentaryComposer::render`] turns the report into the markdown
//!    document stored in history.
//!
//! Sections always appear in the same order: market overview, holdings,
//! sector exposure, risk assessment.

mod collaborators;
mod composer;
pub mod format;
mod report;

pub use collaborators::Collaborators;
pub use composer::{CommentaryComposer, HEADLINE_CHARS};
pub use report::{AnalysisReport, BenchmarkMove, Headline, HoldingReport};
