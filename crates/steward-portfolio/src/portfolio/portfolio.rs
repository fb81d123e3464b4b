//! Portfolio struct and core methods.

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{AssetClass, AssetHolding, Currency};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-class slice of a portfolio.
///
/// Used for both pre-stress and post-stress allocation breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassBreakdown {
    /// Total amount in this class (SGD).
    pub amount: Decimal,

    /// Fraction of the portfolio total, in `[0, 1]`.
    pub fraction: f64,

    /// Number of holdings in this class.
    pub count: usize,
}

/// A reserve portfolio: an ordered list of asset holdings.
///
/// The sum of all amounts is the Original Portfolio Value; it is computed
/// per evaluation and never cached, so the portfolio stays a plain value
/// type with no interior state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Portfolio name.
    pub name: String,

    /// Base currency for reporting.
    pub base_currency: Currency,

    /// Statement date, when known.
    pub as_of_date: Option<NaiveDate>,

    /// Asset holdings, in load order.
    pub holdings: Vec<AssetHolding>,
}

impl Portfolio {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> super::PortfolioBuilder {
        super::PortfolioBuilder::new().name(name)
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Returns the total portfolio value (sum of all holding amounts).
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.holdings.iter().map(|h| h.amount).sum()
    }

    /// Returns the total amount held in one asset class.
    #[must_use]
    pub fn class_total(&self, class: AssetClass) -> Decimal {
        self.holdings
            .iter()
            .filter(|h| h.asset_class == class)
            .map(|h| h.amount)
            .sum()
    }

    /// Returns holdings of one asset class, in load order.
    #[must_use]
    pub fn holdings_of_class(&self, class: AssetClass) -> Vec<&AssetHolding> {
        self.holdings
            .iter()
            .filter(|h| h.asset_class == class)
            .collect()
    }

    /// Returns the pre-stress allocation breakdown by asset class.
    ///
    /// Classes with no holdings are omitted. Fractions are zero when the
    /// portfolio total is zero.
    #[must_use]
    pub fn breakdown(&self) -> BTreeMap<AssetClass, ClassBreakdown> {
        let total = self.total_value();
        let mut result = BTreeMap::new();

        for holding in &self.holdings {
            let entry = result
                .entry(holding.asset_class)
                .or_insert_with(|| ClassBreakdown {
                    amount: Decimal::ZERO,
                    fraction: 0.0,
                    count: 0,
                });
            entry.amount += holding.amount;
            entry.count += 1;
        }

        if total > Decimal::ZERO {
            for entry in result.values_mut() {
                entry.fraction = (entry.amount / total).to_f64().unwrap_or(0.0);
            }
        }

        result
    }

    /// Validates the portfolio.
    ///
    /// Checks every holding for a non-negative amount. The builder enforces
    /// this too; `validate` re-checks portfolios deserialized from files.
    pub fn validate(&self) -> PortfolioResult<()> {
        for holding in &self.holdings {
            if holding.amount < Decimal::ZERO {
                return Err(PortfolioError::NegativeAmount {
                    fund_name: holding.fund_name.clone(),
                    amount: holding.amount.to_string(),
                });
            }
        }
        Ok(())
    }
}
