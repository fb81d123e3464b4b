//! Asset-class taxonomy.
//!
//! The portfolio universe is a closed set of five asset classes. The enum
//! replaces the string codes used by the legacy data files (`Cash_Equivalent`,
//! `Time_Deposit`, ...) so that risk-profile lookups and stress branching get
//! compile-time exhaustiveness checking instead of stringly-typed comparisons.

use crate::error::PortfolioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five asset classes the stress model recognizes.
///
/// Serialized with the legacy file codes so existing portfolio CSVs and
/// cached data remain readable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum AssetClass {
    /// Bank balances and cash equivalents.
    #[default]
    #[serde(rename = "Cash_Equivalent")]
    Cash,

    /// Fixed-term bank deposits; value is insulated from rate moves until
    /// maturity, but breaking the term early costs a penalty.
    #[serde(rename = "Time_Deposit")]
    TimeDeposit,

    /// Money market funds.
    #[serde(rename = "MMF")]
    MoneyMarketFund,

    /// Bond funds.
    #[serde(rename = "Bond_Fund")]
    BondFund,

    /// Multi-asset / balanced funds with equity exposure.
    #[serde(rename = "Multi_Asset")]
    MultiAssetFund,
}

impl AssetClass {
    /// All asset classes, in canonical (liquidity-first) order.
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Cash,
        AssetClass::TimeDeposit,
        AssetClass::MoneyMarketFund,
        AssetClass::BondFund,
        AssetClass::MultiAssetFund,
    ];

    /// Returns the legacy file code for this class.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            AssetClass::Cash => "Cash_Equivalent",
            AssetClass::TimeDeposit => "Time_Deposit",
            AssetClass::MoneyMarketFund => "MMF",
            AssetClass::BondFund => "Bond_Fund",
            AssetClass::MultiAssetFund => "Multi_Asset",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Cash => "Cash & Equivalents",
            AssetClass::TimeDeposit => "Time Deposit",
            AssetClass::MoneyMarketFund => "Money Market Fund",
            AssetClass::BondFund => "Bond Fund",
            AssetClass::MultiAssetFund => "Multi-Asset Fund",
        }
    }

    /// Returns true for fixed-term deposits.
    ///
    /// Time deposits are the one class whose liquidity period is a maturity
    /// date rather than a redemption queue: redemption freezes never apply,
    /// and early withdrawal is what incurs the penalty.
    #[must_use]
    pub fn is_fixed_term(&self) -> bool {
        matches!(self, AssetClass::TimeDeposit)
    }

    /// Parses a class from its legacy file code.
    pub fn from_code(code: &str) -> Result<Self, PortfolioError> {
        match code.trim() {
            "Cash_Equivalent" => Ok(AssetClass::Cash),
            "Time_Deposit" => Ok(AssetClass::TimeDeposit),
            "MMF" => Ok(AssetClass::MoneyMarketFund),
            "Bond_Fund" => Ok(AssetClass::BondFund),
            "Multi_Asset" => Ok(AssetClass::MultiAssetFund),
            other => Err(PortfolioError::unknown_asset_class(other)),
        }
    }
}

impl FromStr for AssetClass {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for class in AssetClass::ALL {
            assert_eq!(AssetClass::from_code(class.code()).unwrap(), class);
        }
    }

    #[test]
    fn test_unknown_code() {
        let err = AssetClass::from_code("Crypto").unwrap_err();
        assert!(err.to_string().contains("Crypto"));
    }

    #[test]
    fn test_fixed_term() {
        assert!(AssetClass::TimeDeposit.is_fixed_term());
        assert!(!AssetClass::MoneyMarketFund.is_fixed_term());
        assert!(!AssetClass::Cash.is_fixed_term());
    }

    #[test]
    fn test_serde_uses_file_codes() {
        let json = serde_json::to_string(&AssetClass::MoneyMarketFund).unwrap();
        assert_eq!(json, "\"MMF\"");

        let parsed: AssetClass = serde_json::from_str("\"Multi_Asset\"").unwrap();
        assert_eq!(parsed, AssetClass::MultiAssetFund);
    }

    #[test]
    fn test_all_is_exhaustive() {
        assert_eq!(AssetClass::ALL.len(), 5);
    }
}
