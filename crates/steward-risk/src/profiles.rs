//! Per-class risk profiles.
//!
//! One static record per asset class: reference volatility, rate
//! sensitivity, class-default liquidity period, and the two eligibility
//! switches the stress passes branch on. The table is read-only
//! configuration; the standard rows are registered in code and can be
//! overridden wholesale from a TOML file.

use crate::error::{RiskError, RiskResult};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use steward_portfolio::AssetClass;

/// Risk parameters for one asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Reference annualized volatility. Informational: surfaced for display
    /// and range commentary, not used by the stress arithmetic.
    pub volatility: f64,

    /// Fractional multiplier applied to the interest-rate shock.
    ///
    /// Zero for fixed-term deposits: a deposit's value is contractually
    /// insulated from rate moves during its term.
    pub interest_rate_sensitivity: Decimal,

    /// Class-level default liquidity period, used when a holding row omits
    /// its own.
    pub base_liquidity_days: u32,

    /// Whether the multi-asset drawdown shock applies to this class.
    pub subject_to_drawdown: bool,

    /// Whether this class can incur an early-withdrawal penalty.
    pub early_withdrawal_eligible: bool,
}

fn cash_profile() -> RiskProfile {
    RiskProfile {
        volatility: 0.001,
        interest_rate_sensitivity: Decimal::new(5, 1), // 0.5
        base_liquidity_days: 0,
        subject_to_drawdown: false,
        early_withdrawal_eligible: false,
    }
}

fn time_deposit_profile() -> RiskProfile {
    RiskProfile {
        volatility: 0.005,
        interest_rate_sensitivity: Decimal::ZERO,
        base_liquidity_days: 180,
        subject_to_drawdown: false,
        early_withdrawal_eligible: true,
    }
}

fn money_market_profile() -> RiskProfile {
    RiskProfile {
        volatility: 0.02,
        interest_rate_sensitivity: Decimal::new(9, 1), // 0.9
        base_liquidity_days: 2,
        subject_to_drawdown: false,
        early_withdrawal_eligible: false,
    }
}

fn bond_fund_profile() -> RiskProfile {
    RiskProfile {
        volatility: 0.08,
        interest_rate_sensitivity: Decimal::new(12, 1), // 1.2
        base_liquidity_days: 5,
        subject_to_drawdown: false,
        early_withdrawal_eligible: false,
    }
}

fn multi_asset_profile() -> RiskProfile {
    RiskProfile {
        volatility: 0.15,
        interest_rate_sensitivity: Decimal::new(3, 1), // 0.3
        base_liquidity_days: 30,
        subject_to_drawdown: true,
        early_withdrawal_eligible: false,
    }
}

/// The complete risk-profile table: one row per asset class.
///
/// Total by construction; lookups never fail. Deserializing from TOML
/// replaces only the classes present in the file, the rest keep their
/// standard rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskProfileTable {
    /// Profile for cash and equivalents.
    pub cash: RiskProfile,

    /// Profile for fixed-term deposits.
    pub time_deposit: RiskProfile,

    /// Profile for money market funds.
    pub money_market_fund: RiskProfile,

    /// Profile for bond funds.
    pub bond_fund: RiskProfile,

    /// Profile for multi-asset funds.
    pub multi_asset_fund: RiskProfile,
}

impl Default for RiskProfileTable {
    fn default() -> Self {
        Self {
            cash: cash_profile(),
            time_deposit: time_deposit_profile(),
            money_market_fund: money_market_profile(),
            bond_fund: bond_fund_profile(),
            multi_asset_fund: multi_asset_profile(),
        }
    }
}

static STANDARD: Lazy<RiskProfileTable> = Lazy::new(RiskProfileTable::default);

impl RiskProfileTable {
    /// Returns the built-in standard table.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Returns the profile for one asset class.
    #[must_use]
    pub fn profile(&self, class: AssetClass) -> &RiskProfile {
        match class {
            AssetClass::Cash => &self.cash,
            AssetClass::TimeDeposit => &self.time_deposit,
            AssetClass::MoneyMarketFund => &self.money_market_fund,
            AssetClass::BondFund => &self.bond_fund,
            AssetClass::MultiAssetFund => &self.multi_asset_fund,
        }
    }

    /// Returns the class-default liquidity period in days.
    #[must_use]
    pub fn default_liquidity_days(&self, class: AssetClass) -> u32 {
        self.profile(class).base_liquidity_days
    }

    /// Parses a table from TOML, keeping standard rows for absent classes.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidProfileConfig`] on parse failure.
    pub fn from_toml_str(raw: &str) -> RiskResult<Self> {
        toml::from_str(raw).map_err(|e| RiskError::invalid_profile_config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_table() {
        let table = RiskProfileTable::standard();

        // Time deposits: zero rate sensitivity, penalty-eligible.
        let td = table.profile(AssetClass::TimeDeposit);
        assert_eq!(td.interest_rate_sensitivity, Decimal::ZERO);
        assert!(td.early_withdrawal_eligible);
        assert!(!td.subject_to_drawdown);
        assert_eq!(td.base_liquidity_days, 180);

        // Only multi-asset funds take the drawdown shock.
        for class in AssetClass::ALL {
            let subject = table.profile(class).subject_to_drawdown;
            assert_eq!(subject, class == AssetClass::MultiAssetFund);
        }

        // Only time deposits are penalty-eligible.
        for class in AssetClass::ALL {
            let eligible = table.profile(class).early_withdrawal_eligible;
            assert_eq!(eligible, class == AssetClass::TimeDeposit);
        }
    }

    #[test]
    fn test_standard_sensitivities() {
        let table = RiskProfileTable::standard();
        assert_eq!(
            table.profile(AssetClass::Cash).interest_rate_sensitivity,
            dec!(0.5)
        );
        assert_eq!(
            table
                .profile(AssetClass::MoneyMarketFund)
                .interest_rate_sensitivity,
            dec!(0.9)
        );
        assert_eq!(
            table.profile(AssetClass::BondFund).interest_rate_sensitivity,
            dec!(1.2)
        );
        assert_eq!(
            table
                .profile(AssetClass::MultiAssetFund)
                .interest_rate_sensitivity,
            dec!(0.3)
        );
    }

    #[test]
    fn test_partial_toml_override() {
        let raw = r#"
            [bond_fund]
            volatility = 0.10
            interest_rate_sensitivity = 1.5
            base_liquidity_days = 7
            subject_to_drawdown = false
            early_withdrawal_eligible = false
        "#;

        let table = RiskProfileTable::from_toml_str(raw).unwrap();

        // Overridden class picks up the file values.
        let bond = table.profile(AssetClass::BondFund);
        assert_eq!(bond.base_liquidity_days, 7);
        assert_eq!(bond.interest_rate_sensitivity, dec!(1.5));

        // Everything else keeps the standard rows.
        assert_eq!(
            table.profile(AssetClass::TimeDeposit),
            RiskProfileTable::standard().profile(AssetClass::TimeDeposit)
        );
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = RiskProfileTable::from_toml_str("not toml at all [").unwrap_err();
        assert!(err.to_string().contains("risk-profile"));
    }
}
