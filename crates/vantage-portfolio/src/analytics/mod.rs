//! Holding- and sector-level analytics.
//!
//! - [`metrics`]: Per-holding P/L, percent change and momentum classification
//! - [`risk`]: Per-sector composite risk scores (the risk heatmap)
//!
//! All functions are pure - they take holdings and signals as input
//! and return computed results. No caching, no I/O, no side effects.

pub mod metrics;
pub mod risk;

pub use metrics::*;
pub use risk::*;
