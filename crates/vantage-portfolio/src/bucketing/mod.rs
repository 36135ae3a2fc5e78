//! Portfolio bucketing.
//!
//! - **Sector bucketing**: Aggregated value and exposure per sector, plus the
//!   concentration check
//!
//! All functions are pure - they take a portfolio and return distributions
//! without modifying state.

mod sector;

pub use sector::*;
