//! # Steward Portfolio
//!
//! Asset holdings data model for the Steward stress-testing toolkit.
//!
//! This crate is the leaf of the workspace: the closed asset-class taxonomy,
//! individual holding rows, and the portfolio container that the risk engine
//! evaluates and the file loaders populate.
//!
//! ## Design Philosophy
//!
//! - **Pure types**: no I/O, no market data, no stress arithmetic
//! - **Validated at the edge**: builders reject negative amounts so the
//!   engine can assume pre-validated input
//! - **Decimal money**: amounts are `rust_decimal::Decimal`, never floats
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use steward_portfolio::prelude::*;
//!
//! let portfolio = PortfolioBuilder::new()
//!     .name("Operating Reserves")
//!     .add_holding(
//!         AssetHolding::builder()
//!             .asset_class(AssetClass::TimeDeposit)
//!             .amount(dec!(1_300_000))
//!             .fund_name("UOB 12M Fixed Deposit")
//!             .liquidity_period_days(180)
//!             .build()?,
//!     )
//!     .build()?;
//!
//! let total = portfolio.total_value();
//! let by_class = portfolio.breakdown();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod portfolio;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use portfolio::{ClassBreakdown, Portfolio, PortfolioBuilder};
pub use types::{AssetClass, AssetHolding, Currency, HoldingBuilder};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use steward_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::portfolio::{ClassBreakdown, Portfolio, PortfolioBuilder};
    pub use crate::types::{AssetClass, AssetHolding, Currency, HoldingBuilder};

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
}
