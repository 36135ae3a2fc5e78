//! Commentary history and improvement heuristics.
//!
//! - [`CommentarySnapshot`]: one generated text with its timestamp and kind
//! - [`HistoryStore`]: append-only, ordered log of snapshots
//! - [`ImprovementRules`]: ordered gap detectors run over prior commentary

mod improvement;
mod snapshot;
mod store;

pub use improvement::*;
pub use snapshot::*;
pub use store::*;
