//! Computed stress metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use steward_portfolio::{AssetClass, ClassBreakdown};

/// One holding after the stress passes.
///
/// Kept in input order so the table surface can show the portfolio
/// line-by-line next to its stressed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressedHolding {
    /// Display label of the holding.
    pub fund_name: String,

    /// Asset class of the holding.
    pub asset_class: AssetClass,

    /// Amount before stress (SGD).
    pub original_amount: Decimal,

    /// Amount after all stress passes (SGD), floored at zero.
    pub stressed_amount: Decimal,

    /// Liquidity period after the redemption freeze (days). Fixed-term
    /// deposits keep their base period.
    pub adjusted_liquidity_days: u32,
}

/// The metrics record produced by one stress evaluation.
///
/// A pure function output: never mutated after creation, recomputed fresh
/// on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressMetrics {
    /// Portfolio value before stress (SGD).
    pub original_portfolio_value: Decimal,

    /// Portfolio value after stress (SGD).
    pub stressed_portfolio_value: Decimal,

    /// Peak-to-stressed decline, `(original - stressed) / original`.
    pub maximum_drawdown: f64,

    /// Stressed value divided by annual OPEX.
    pub reserve_coverage_ratio: f64,

    /// Coverage ratio scaled to the reserve-months requirement.
    pub reserve_months_covered: f64,

    /// Value-weighted average days to liquidity, weighted by post-stress
    /// values.
    pub time_to_liquidity_days: f64,

    /// True when the drawdown exceeds the volatility threshold.
    pub volatility_breach: bool,

    /// True when time-to-liquidity exceeds the liquidity threshold.
    pub liquidity_breach: bool,

    /// Post-stress allocation by asset class. Empty when the stressed
    /// portfolio value is zero (the allocation is undefined, not an error).
    pub post_stress_allocation: BTreeMap<AssetClass, ClassBreakdown>,

    /// Per-holding stressed values, in input order.
    pub per_holding: Vec<StressedHolding>,
}

impl StressMetrics {
    /// Returns true when either breach flag is raised.
    #[must_use]
    pub fn any_breach(&self) -> bool {
        self.volatility_breach || self.liquidity_breach
    }

    /// Absolute value lost to stress (SGD).
    #[must_use]
    pub fn value_lost(&self) -> Decimal {
        self.original_portfolio_value - self.stressed_portfolio_value
    }
}
