//! # Steward Risk
//!
//! Stress-testing engine for reserve portfolios.
//!
//! Given an immutable portfolio, a per-class risk-profile table, and one
//! stress-parameter set, the engine deterministically produces a metrics
//! record: stressed value, maximum drawdown, reserve coverage, weighted
//! time to liquidity, breach flags, and a post-stress allocation
//! breakdown.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: `evaluate` has no side effects, I/O, or
//!   randomness; identical inputs yield identical output
//! - **Stateless**: no caching, no globals; thread safety falls out of the
//!   construction rather than locking
//! - **Explicit configuration**: OPEX and thresholds travel in
//!   [`EngineConfig`], never in mutable module state
//! - **Decimal money**: shocks multiply `Decimal` amounts exactly; only
//!   ratios drop to `f64`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use steward_risk::prelude::*;
//!
//! let metrics = evaluate(
//!     &portfolio,
//!     RiskProfileTable::standard(),
//!     &presets::covid_19().params,
//!     &EngineConfig::default(),
//! )?;
//!
//! if metrics.volatility_breach {
//!     println!("drawdown {:.1}%", metrics.maximum_drawdown * 100.0);
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Engine configuration and breach thresholds
//! - [`engine`] - The stress evaluation pass
//! - [`insights`] - Human-readable observations over a metrics record
//! - [`metrics`] - Metrics output types
//! - [`params`] - Stress parameters and documented ranges
//! - [`profiles`] - Per-class risk profiles
//! - [`scenarios`] - Named scenarios, presets, and batch comparison

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod error;
pub mod insights;
pub mod metrics;
pub mod params;
pub mod profiles;
pub mod scenarios;

// Re-export error types at crate root
pub use error::{RiskError, RiskResult};

// Re-export main types and entry points
pub use config::{EngineConfig, RiskThresholds};
pub use engine::evaluate;
pub use insights::{generate_summary_insights, Insight, InsightSeverity};
pub use metrics::{StressMetrics, StressedHolding};
pub use params::{DayRange, ParameterRange, ParameterRanges, StressParameters};
pub use profiles::{RiskProfile, RiskProfileTable};
pub use scenarios::{
    best_case, compare_scenarios, presets, worst_case, ScenarioResult, StressScenario,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use steward_risk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{EngineConfig, RiskThresholds};
    pub use crate::engine::evaluate;
    pub use crate::error::{RiskError, RiskResult};
    pub use crate::insights::{generate_summary_insights, Insight, InsightSeverity};
    pub use crate::metrics::{StressMetrics, StressedHolding};
    pub use crate::params::{ParameterRanges, StressParameters};
    pub use crate::profiles::{RiskProfile, RiskProfileTable};
    pub use crate::scenarios::{
        best_case, compare_scenarios, presets, worst_case, ScenarioResult, StressScenario,
    };

    // Re-export the portfolio types callers hand to the engine
    pub use steward_portfolio::{AssetClass, AssetHolding, Portfolio, PortfolioBuilder};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = RiskError::scenario_not_found("nothing");
        assert!(err.to_string().contains("nothing"));
    }
}
