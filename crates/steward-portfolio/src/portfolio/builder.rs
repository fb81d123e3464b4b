//! Portfolio builder for fluent construction.

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{AssetHolding, Currency};
use crate::Portfolio;
use chrono::NaiveDate;

/// Builder for constructing a [`Portfolio`].
///
/// # Example
///
/// ```rust,ignore
/// use steward_portfolio::prelude::*;
///
/// let portfolio = PortfolioBuilder::new()
///     .name("Operating Reserves")
///     .add_holding(cash)
///     .add_holding(deposit)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    name: Option<String>,
    base_currency: Currency,
    as_of_date: Option<NaiveDate>,
    holdings: Vec<AssetHolding>,
}

impl PortfolioBuilder {
    /// Creates a new portfolio builder with defaults (SGD base currency).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the base currency for reporting.
    #[must_use]
    pub fn base_currency(mut self, currency: Currency) -> Self {
        self.base_currency = currency;
        self
    }

    /// Sets the statement date.
    #[must_use]
    pub fn as_of_date(mut self, date: NaiveDate) -> Self {
        self.as_of_date = Some(date);
        self
    }

    /// Adds a holding to the portfolio.
    #[must_use]
    pub fn add_holding(mut self, holding: AssetHolding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Adds multiple holdings to the portfolio.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = AssetHolding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Sets all holdings (replacing any existing).
    #[must_use]
    pub fn holdings(mut self, holdings: Vec<AssetHolding>) -> Self {
        self.holdings = holdings;
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is missing or validation fails.
    pub fn build(self) -> PortfolioResult<Portfolio> {
        let name = self
            .name
            .ok_or_else(|| PortfolioError::missing_field("name"))?;

        let portfolio = Portfolio {
            name,
            base_currency: self.base_currency,
            as_of_date: self.as_of_date,
            holdings: self.holdings,
        };

        portfolio.validate()?;

        Ok(portfolio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssetClass;
    use rust_decimal_macros::dec;

    #[test]
    fn test_basic_build() {
        let portfolio = PortfolioBuilder::new().name("Reserves").build().unwrap();

        assert_eq!(portfolio.name, "Reserves");
        assert_eq!(portfolio.base_currency, Currency::SGD);
        assert!(portfolio.is_empty());
        assert!(portfolio.as_of_date.is_none());
    }

    #[test]
    fn test_missing_name() {
        let result = PortfolioBuilder::new().build();
        assert!(result.unwrap_err().to_string().contains("name"));
    }

    #[test]
    fn test_add_holdings_batch() {
        let holdings = vec![
            AssetHolding::builder()
                .asset_class(AssetClass::Cash)
                .amount(dec!(100_000))
                .liquidity_period_days(0)
                .build()
                .unwrap(),
            AssetHolding::builder()
                .asset_class(AssetClass::BondFund)
                .amount(dec!(250_000))
                .liquidity_period_days(5)
                .build()
                .unwrap(),
        ];

        let portfolio = PortfolioBuilder::new()
            .name("Reserves")
            .as_of_date(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
            .add_holdings(holdings)
            .build()
            .unwrap();

        assert_eq!(portfolio.holding_count(), 2);
        assert_eq!(portfolio.total_value(), dec!(350_000));
        assert!(portfolio.as_of_date.is_some());
    }
}
