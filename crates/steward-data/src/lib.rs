//! # Steward Data
//!
//! File-based collaborators for the Steward toolkit: portfolio CSV load
//! and save, and a market reference data store with dated JSON cache
//! files and a fallback ladder.
//!
//! The stress engine never depends on this crate. Market data informs
//! display and reporting only, and its retry/fallback policy stops here:
//! by the time a portfolio or snapshot reaches the engine it is a plain
//! validated value.
//!
//! ## Module Overview
//!
//! - [`portfolio_csv`] - Portfolio CSV schema, load, and save
//! - [`market_data`] - Snapshot types, reference data, expected returns
//! - [`store`] - Dated JSON cache with the fallback ladder

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod market_data;
pub mod portfolio_csv;
pub mod store;

// Re-export error types at crate root
pub use error::{DataError, DataResult};

// Re-export main types and entry points
pub use market_data::{
    asset_proxy, expected_returns, reference_snapshot, BondYields, IndexQuote, MarketSnapshot,
    SingaporeRates, SnapshotSource,
};
pub use portfolio_csv::{load_portfolio, save_portfolio};
pub use store::{
    CachePolicy, CachedSnapshot, FetchOutcome, MarketDataProvider, MarketDataStore, Provenance,
    ReferenceProvider,
};
