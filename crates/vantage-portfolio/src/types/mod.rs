//! Domain types for portfolio analytics.
//!
//! - [`Holding`]: A single equity position
//! - [`Sector`] / [`SectorMap`]: The declarative ticker → sector table
//! - [`PortfolioConfig`]: Serializable holdings and sector configuration

mod config;
mod holding;
mod sector;

// Re-export all types
pub use config::{BenchmarkConfig, HoldingConfig, PortfolioConfig};
pub use holding::{Holding, HoldingBuilder};
pub use sector::{Sector, SectorDefinition, SectorMap};
