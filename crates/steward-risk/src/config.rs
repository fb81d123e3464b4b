//! Engine configuration.
//!
//! The legacy implementation kept OPEX and the breach thresholds as
//! module-level constants. Here they travel in an explicit configuration
//! struct passed to the engine at call time, so each evaluation (and each
//! test case) states its own assumptions.

use crate::error::{RiskError, RiskResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Breach thresholds for the summary flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Maximum-drawdown level above which the volatility flag trips.
    pub volatility_breach: f64,

    /// Time-to-liquidity (days) above which the liquidity flag trips.
    pub liquidity_breach_days: f64,

    /// Window (days) within which a holding counts as accessible when
    /// sizing the early-withdrawal liquidity gap.
    pub liquid_window_days: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            volatility_breach: 0.20,
            liquidity_breach_days: 90.0,
            liquid_window_days: 30,
        }
    }
}

/// Configuration for one stress evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Annual operating expenditure in SGD. Denominator of the
    /// reserve-coverage ratio; must be strictly positive.
    pub annual_opex: Decimal,

    /// Months of reserves the coverage ratio is read against. The engine
    /// only uses this to report `reserve_months_covered`; the adequacy
    /// interpretation stays with the caller.
    pub reserve_months_required: u32,

    /// Breach thresholds.
    pub thresholds: RiskThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            annual_opex: Decimal::from(2_400_000),
            reserve_months_required: 12,
            thresholds: RiskThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the given annual OPEX and defaults
    /// for everything else.
    #[must_use]
    pub fn with_annual_opex(annual_opex: Decimal) -> Self {
        Self {
            annual_opex,
            ..Self::default()
        }
    }

    /// Sets the reserve-months requirement.
    #[must_use]
    pub fn reserve_months(mut self, months: u32) -> Self {
        self.reserve_months_required = months;
        self
    }

    /// Sets the breach thresholds.
    #[must_use]
    pub fn thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::NonPositiveOpex`] when `annual_opex <= 0`.
    pub fn validate(&self) -> RiskResult<()> {
        if self.annual_opex <= Decimal::ZERO {
            return Err(RiskError::non_positive_opex(self.annual_opex));
        }
        Ok(())
    }
}
