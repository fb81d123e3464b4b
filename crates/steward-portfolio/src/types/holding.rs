//! Holding representation: one portfolio line item.

use super::AssetClass;
use crate::error::{PortfolioError, PortfolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single portfolio line item.
///
/// Holdings are loaded once per session and treated as immutable for the
/// duration of an evaluation; edits go through the file loader, never the
/// risk engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetHolding {
    /// Asset class; determines which risk-profile parameters apply.
    pub asset_class: AssetClass,

    /// Amount in base currency (SGD). Always non-negative.
    pub amount: Decimal,

    /// Display label. No computational role.
    pub fund_name: String,

    /// Base number of days to convert this holding to cash absent stress.
    pub liquidity_period_days: u32,

    /// Free-text notes. No computational role.
    pub notes: String,
}

impl AssetHolding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::default()
    }
}

/// Builder for constructing an [`AssetHolding`].
///
/// Rejects negative amounts at construction so that the engine can assume
/// pre-validated input.
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    asset_class: Option<AssetClass>,
    amount: Option<Decimal>,
    fund_name: String,
    liquidity_period_days: Option<u32>,
    notes: String,
}

impl HoldingBuilder {
    /// Sets the asset class.
    #[must_use]
    pub fn asset_class(mut self, class: AssetClass) -> Self {
        self.asset_class = Some(class);
        self
    }

    /// Sets the amount in SGD.
    #[must_use]
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the display label.
    #[must_use]
    pub fn fund_name(mut self, name: impl Into<String>) -> Self {
        self.fund_name = name.into();
        self
    }

    /// Sets the base liquidity period in days.
    #[must_use]
    pub fn liquidity_period_days(mut self, days: u32) -> Self {
        self.liquidity_period_days = Some(days);
        self
    }

    /// Sets free-text notes.
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Builds the holding.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field (asset class, amount, liquidity
    /// period) is missing or the amount is negative.
    pub fn build(self) -> PortfolioResult<AssetHolding> {
        let asset_class = self
            .asset_class
            .ok_or_else(|| PortfolioError::missing_field("asset_class"))?;

        let amount = self
            .amount
            .ok_or_else(|| PortfolioError::missing_field("amount"))?;

        let liquidity_period_days = self
            .liquidity_period_days
            .ok_or_else(|| PortfolioError::missing_field("liquidity_period_days"))?;

        if amount < Decimal::ZERO {
            return Err(PortfolioError::NegativeAmount {
                fund_name: self.fund_name,
                amount: amount.to_string(),
            });
        }

        Ok(AssetHolding {
            asset_class,
            amount,
            fund_name: self.fund_name,
            liquidity_period_days,
            notes: self.notes,
        })
    }
}
