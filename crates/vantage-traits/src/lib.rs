//! # Vantage Traits
//!
//! Trait definitions for the collaborators the Vantage commentary engine
//! consumes.
//!
//! This crate contains ONLY trait definitions and the transient data types
//! that cross them. All implementations live in extension crates.
//!
//! ## Module Structure
//!
//! - [`market_data`]: Price history, derived market signals, benchmark sessions
//! - [`news`]: Headlines matching a ticker
//! - [`ids`]: The [`Ticker`] identifier
//!
//! ## Dependency Injection
//!
//! The engine receives these traits as trait objects:
//!
//! ```ignore
//! CommentaryEngine::builder(portfolio)
//!     .with_signals(impl MarketSignalSource)
//!     .with_news(impl NewsSource)
//!     .with_benchmark(impl BenchmarkSource)
//!     .build()
//! ```
//!
//! Every call is synchronous and blocking. A source that fails returns a
//! [`TraitError`]; the engine degrades the affected report section instead
//! of propagating it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ids;
pub mod market_data;
pub mod news;

// Re-export commonly used types
pub use error::TraitError;
pub use ids::Ticker;
pub use market_data::{BenchmarkSource, MarketSignal, MarketSignalSource, PriceBar, SessionBar};
pub use news::{NewsItem, NewsSource};
