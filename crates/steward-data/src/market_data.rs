//! Market reference data snapshot types.
//!
//! A snapshot carries the Singapore rate complex, a handful of market
//! indices, and SGS yields. It is read-only context for the dashboard
//! sidebar and the risk-profile commentary; the stress engine never
//! consumes it.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use steward_portfolio::AssetClass;

/// Singapore money-market and treasury rates, as decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingaporeRates {
    /// Singapore Overnight Rate Average.
    pub sora_rate: f64,
    /// 3-month treasury bill yield.
    pub treasury_3m: f64,
    /// 6-month treasury bill yield.
    pub treasury_6m: f64,
    /// 12-month treasury bill yield.
    pub treasury_12m: f64,
    /// Average fixed-deposit board rate.
    pub fd_rates_average: f64,
}

/// One market index quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexQuote {
    /// Current index level.
    pub level: f64,
    /// Trailing one-year return, as a decimal.
    pub one_year_return: f64,
    /// Annualized volatility, as a decimal.
    pub volatility: f64,
}

/// Singapore government bond yields, as decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondYields {
    /// 2-year SGS yield.
    pub sgs_2y: f64,
    /// 5-year SGS yield.
    pub sgs_5y: f64,
    /// 10-year SGS yield.
    pub sgs_10y: f64,
    /// 20-year SGS yield.
    pub sgs_20y: f64,
}

/// Where a snapshot's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotSource {
    /// Supplied by a live provider.
    Provider,
    /// The compiled-in reference snapshot.
    Reference,
}

/// A complete market reference data snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Singapore rate complex.
    pub singapore_rates: SingaporeRates,

    /// Market indices keyed by symbol (`STI`, `MSCI_World`, ...).
    pub market_indices: BTreeMap<String, IndexQuote>,

    /// SGS yield curve points.
    pub bond_yields: BondYields,

    /// Provenance of the numbers.
    pub source: SnapshotSource,

    /// When the snapshot was taken.
    pub last_updated: DateTime<Utc>,
}

/// The compiled-in reference snapshot, used when no provider and no cache
/// can supply anything better.
#[must_use]
pub fn reference_snapshot() -> MarketSnapshot {
    let mut indices = BTreeMap::new();
    indices.insert(
        "STI".to_string(),
        IndexQuote {
            level: 3250.0,
            one_year_return: 0.085,
            volatility: 0.18,
        },
    );
    indices.insert(
        "MSCI_World".to_string(),
        IndexQuote {
            level: 2890.0,
            one_year_return: 0.12,
            volatility: 0.16,
        },
    );
    indices.insert(
        "MSCI_Asia".to_string(),
        IndexQuote {
            level: 690.0,
            one_year_return: 0.095,
            volatility: 0.19,
        },
    );
    indices.insert(
        "Global_Bonds".to_string(),
        IndexQuote {
            level: 485.0,
            one_year_return: 0.025,
            volatility: 0.065,
        },
    );

    MarketSnapshot {
        singapore_rates: SingaporeRates {
            sora_rate: 0.035,
            treasury_3m: 0.034,
            treasury_6m: 0.036,
            treasury_12m: 0.038,
            fd_rates_average: 0.031,
        },
        market_indices: indices,
        bond_yields: BondYields {
            sgs_2y: 0.032,
            sgs_5y: 0.035,
            sgs_10y: 0.039,
            sgs_20y: 0.041,
        },
        source: SnapshotSource::Reference,
        // The reference numbers were compiled as of this date.
        last_updated: Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap(),
    }
}

/// Returns the market proxy symbol for an asset class.
///
/// Rate-backed classes map onto the rate complex; fund classes map onto an
/// index symbol.
#[must_use]
pub fn asset_proxy(class: AssetClass) -> &'static str {
    match class {
        AssetClass::Cash | AssetClass::MoneyMarketFund => "sora_rate",
        AssetClass::TimeDeposit => "fd_rates_average",
        AssetClass::BondFund => "Global_Bonds",
        AssetClass::MultiAssetFund => "MSCI_World",
    }
}

/// Derives expected returns per asset class from a snapshot.
///
/// Rate-backed classes scale their proxied rate by the horizon; index
/// classes use the trailing one-year return. A class whose proxy is
/// missing from the snapshot falls back to a flat 3% a year.
#[must_use]
pub fn expected_returns(
    snapshot: &MarketSnapshot,
    horizon_years: f64,
) -> BTreeMap<AssetClass, f64> {
    let rates = &snapshot.singapore_rates;
    let mut result = BTreeMap::new();

    for class in AssetClass::ALL {
        let annual = match asset_proxy(class) {
            "sora_rate" => Some(rates.sora_rate),
            "fd_rates_average" => Some(rates.fd_rates_average),
            symbol => snapshot
                .market_indices
                .get(symbol)
                .map(|quote| quote.one_year_return),
        };

        result.insert(class, annual.unwrap_or(0.03) * horizon_years);
    }

    result
}
