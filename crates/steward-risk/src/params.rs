//! Stress parameters and their documented ranges.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One parameter set for a stress evaluation.
///
/// Constructed fresh per evaluation - copied from a preset or built from
/// slider values - and immutable once handed to the engine. All fractional
/// shocks are signed decimals (e.g. `-0.15` for a 15% drawdown).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StressParameters {
    /// Signed interest-rate change. Typical range `[-0.02, 0.02]`.
    pub interest_rate_shock: Decimal,

    /// Inflation spike. Typical range `[0.02, 0.08]`.
    ///
    /// Carried for preset and UI compatibility; no holding class reacts to
    /// it in the corrected valuation model, and the engine deliberately
    /// gives it no effect.
    pub inflation_spike: Decimal,

    /// Drawdown applied to drawdown-eligible classes. Typically negative,
    /// range `[-0.50, -0.10]`.
    pub multi_asset_drawdown: Decimal,

    /// Extra days added to every non-fixed-term holding's liquidity period.
    pub redemption_freeze_days: u32,

    /// Early-withdrawal penalty fraction for fixed-term deposits. Typically
    /// negative, range `[-0.03, 0.0]`; applied only to the deposit portion
    /// needed to close a liquidity gap.
    pub early_withdrawal_penalty: Decimal,

    /// Uniform counterparty writedown across all classes, range
    /// `[0.0, 0.05]`. Per-class targeting is a documented extension point,
    /// not implemented.
    pub counterparty_risk_shock: Decimal,
}

impl StressParameters {
    /// Creates a neutral (zero-shock) parameter set.
    #[must_use]
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Sets the interest-rate shock.
    #[must_use]
    pub fn with_interest_rate_shock(mut self, shock: Decimal) -> Self {
        self.interest_rate_shock = shock;
        self
    }

    /// Sets the inflation spike.
    #[must_use]
    pub fn with_inflation_spike(mut self, spike: Decimal) -> Self {
        self.inflation_spike = spike;
        self
    }

    /// Sets the multi-asset drawdown.
    #[must_use]
    pub fn with_multi_asset_drawdown(mut self, drawdown: Decimal) -> Self {
        self.multi_asset_drawdown = drawdown;
        self
    }

    /// Sets the redemption freeze in days.
    #[must_use]
    pub fn with_redemption_freeze_days(mut self, days: u32) -> Self {
        self.redemption_freeze_days = days;
        self
    }

    /// Sets the early-withdrawal penalty.
    #[must_use]
    pub fn with_early_withdrawal_penalty(mut self, penalty: Decimal) -> Self {
        self.early_withdrawal_penalty = penalty;
        self
    }

    /// Sets the counterparty risk shock.
    #[must_use]
    pub fn with_counterparty_risk_shock(mut self, shock: Decimal) -> Self {
        self.counterparty_risk_shock = shock;
        self
    }

    /// Returns a copy with every field clamped to its documented range.
    ///
    /// The engine itself does not re-validate ranges; this is the helper
    /// the parameter-entry surface uses before handing values over.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let r = ParameterRanges::documented();
        Self {
            interest_rate_shock: r.interest_rate_shock.clamp(self.interest_rate_shock),
            inflation_spike: r.inflation_spike.clamp(self.inflation_spike),
            multi_asset_drawdown: r.multi_asset_drawdown.clamp(self.multi_asset_drawdown),
            redemption_freeze_days: self
                .redemption_freeze_days
                .clamp(r.redemption_freeze_days.min, r.redemption_freeze_days.max),
            early_withdrawal_penalty: r
                .early_withdrawal_penalty
                .clamp(self.early_withdrawal_penalty),
            counterparty_risk_shock: r
                .counterparty_risk_shock
                .clamp(self.counterparty_risk_shock),
        }
    }
}

/// Documented range for one fractional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    /// Lower bound.
    pub min: Decimal,
    /// Upper bound.
    pub max: Decimal,
    /// Slider default.
    pub default: Decimal,
}

impl ParameterRange {
    /// Clamps a value into this range.
    #[must_use]
    pub fn clamp(&self, value: Decimal) -> Decimal {
        value.clamp(self.min, self.max)
    }
}

/// Documented range for the freeze-days parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    /// Lower bound.
    pub min: u32,
    /// Upper bound.
    pub max: u32,
    /// Slider default.
    pub default: u32,
}

/// The documented min/max/default for every stress parameter.
///
/// The parameter-entry surface clamps to these; the engine trusts its
/// input beyond the positivity of OPEX.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRanges {
    /// Interest-rate shock range.
    pub interest_rate_shock: ParameterRange,
    /// Inflation spike range.
    pub inflation_spike: ParameterRange,
    /// Multi-asset drawdown range.
    pub multi_asset_drawdown: ParameterRange,
    /// Redemption freeze range.
    pub redemption_freeze_days: DayRange,
    /// Early-withdrawal penalty range.
    pub early_withdrawal_penalty: ParameterRange,
    /// Counterparty shock range.
    pub counterparty_risk_shock: ParameterRange,
}

static DOCUMENTED: Lazy<ParameterRanges> = Lazy::new(|| ParameterRanges {
    interest_rate_shock: ParameterRange {
        min: Decimal::new(-2, 2),
        max: Decimal::new(2, 2),
        default: Decimal::ZERO,
    },
    inflation_spike: ParameterRange {
        min: Decimal::new(2, 2),
        max: Decimal::new(8, 2),
        default: Decimal::new(35, 3),
    },
    multi_asset_drawdown: ParameterRange {
        min: Decimal::new(-50, 2),
        max: Decimal::new(-10, 2),
        default: Decimal::new(-20, 2),
    },
    redemption_freeze_days: DayRange {
        min: 0,
        max: 30,
        default: 0,
    },
    early_withdrawal_penalty: ParameterRange {
        min: Decimal::new(-3, 2),
        max: Decimal::ZERO,
        default: Decimal::new(-1, 2),
    },
    counterparty_risk_shock: ParameterRange {
        min: Decimal::ZERO,
        max: Decimal::new(5, 2),
        default: Decimal::ZERO,
    },
});

impl ParameterRanges {
    /// Returns the documented ranges.
    #[must_use]
    pub fn documented() -> &'static Self {
        &DOCUMENTED
    }
}
