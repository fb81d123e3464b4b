//! The stress evaluation pass.
//!
//! `evaluate` is a pure function: portfolio in, metrics out. No I/O, no
//! randomness, no state between calls; identical inputs produce identical
//! output, which the report surface relies on for reproducibility.
//!
//! Per holding, shocks apply in a fixed order: interest-rate adjustment,
//! drawdown, counterparty writedown, floor at zero. The early-withdrawal
//! penalty is a separate portfolio-level pass that only triggers when the
//! liquid sleeve cannot cover annual OPEX, and only consumes the deposit
//! portion notionally needed to close the gap.

use crate::config::EngineConfig;
use crate::error::RiskResult;
use crate::metrics::{StressMetrics, StressedHolding};
use crate::params::StressParameters;
use crate::profiles::RiskProfileTable;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use steward_portfolio::{ClassBreakdown, Portfolio};

/// Evaluates one stress scenario against a portfolio.
///
/// # Errors
///
/// Returns an error when `config.annual_opex` is not strictly positive or
/// a holding carries a negative amount. A portfolio stressed all the way
/// to zero is not an error: the metrics come back with zero coverage and
/// an empty allocation.
pub fn evaluate(
    portfolio: &Portfolio,
    profiles: &RiskProfileTable,
    params: &StressParameters,
    config: &EngineConfig,
) -> RiskResult<StressMetrics> {
    config.validate()?;
    portfolio.validate()?;

    let original_value = portfolio.total_value();

    let mut stressed = apply_asset_shocks(portfolio, profiles, params);
    apply_early_withdrawal_penalty(&mut stressed, profiles, params, config);

    let stressed_value: Decimal = stressed.iter().map(|h| h.stressed_amount).sum();

    let maximum_drawdown = if original_value > Decimal::ZERO {
        ((original_value - stressed_value) / original_value)
            .to_f64()
            .unwrap_or(0.0)
    } else {
        0.0
    };

    let reserve_coverage_ratio = (stressed_value / config.annual_opex).to_f64().unwrap_or(0.0);
    let reserve_months_covered =
        reserve_coverage_ratio * f64::from(config.reserve_months_required);

    let time_to_liquidity_days = weighted_liquidity_days(&stressed, stressed_value);

    Ok(StressMetrics {
        original_portfolio_value: original_value,
        stressed_portfolio_value: stressed_value,
        maximum_drawdown,
        reserve_coverage_ratio,
        reserve_months_covered,
        time_to_liquidity_days,
        volatility_breach: maximum_drawdown > config.thresholds.volatility_breach,
        liquidity_breach: time_to_liquidity_days > config.thresholds.liquidity_breach_days,
        post_stress_allocation: allocation(&stressed, stressed_value),
        per_holding: stressed,
    })
}

/// Applies the per-holding shocks in order: rate, drawdown, counterparty,
/// floor at zero.
fn apply_asset_shocks(
    portfolio: &Portfolio,
    profiles: &RiskProfileTable,
    params: &StressParameters,
) -> Vec<StressedHolding> {
    portfolio
        .holdings
        .iter()
        .map(|holding| {
            let profile = profiles.profile(holding.asset_class);
            let mut value = holding.amount;

            // Rate shock. Fixed-term deposits are contractually insulated
            // until maturity regardless of what the profile table says.
            if profile.interest_rate_sensitivity > Decimal::ZERO
                && !holding.asset_class.is_fixed_term()
            {
                value *= Decimal::ONE
                    + params.interest_rate_shock * profile.interest_rate_sensitivity;
            }

            if profile.subject_to_drawdown {
                value *= Decimal::ONE + params.multi_asset_drawdown;
            }

            value *= Decimal::ONE - params.counterparty_risk_shock;

            let adjusted_liquidity_days = if holding.asset_class.is_fixed_term() {
                holding.liquidity_period_days
            } else {
                holding.liquidity_period_days + params.redemption_freeze_days
            };

            StressedHolding {
                fund_name: holding.fund_name.clone(),
                asset_class: holding.asset_class,
                original_amount: holding.amount,
                stressed_amount: value.max(Decimal::ZERO),
                adjusted_liquidity_days,
            }
        })
        .collect()
}

/// Applies the early-withdrawal penalty to fixed-term deposits, but only
/// up to the portion needed to close the liquidity gap.
fn apply_early_withdrawal_penalty(
    stressed: &mut [StressedHolding],
    profiles: &RiskProfileTable,
    params: &StressParameters,
    config: &EngineConfig,
) {
    let window = config.thresholds.liquid_window_days;

    let available_liquidity: Decimal = stressed
        .iter()
        .filter(|h| h.adjusted_liquidity_days <= window)
        .map(|h| h.stressed_amount)
        .sum();

    if available_liquidity >= config.annual_opex {
        return;
    }

    let eligible_total: Decimal = stressed
        .iter()
        .filter(|h| profiles.profile(h.asset_class).early_withdrawal_eligible)
        .map(|h| h.stressed_amount)
        .sum();

    if eligible_total <= Decimal::ZERO {
        return;
    }

    // Only the notional needed to close the gap is broken early; deposits
    // that would never be touched are not penalized.
    let liquidity_gap = config.annual_opex - available_liquidity;
    let penalized_notional = liquidity_gap.min(eligible_total);

    for holding in stressed
        .iter_mut()
        .filter(|h| profiles.profile(h.asset_class).early_withdrawal_eligible)
    {
        // Pro rata by stressed value, so the pass is order-independent.
        let share = holding.stressed_amount / eligible_total;
        let adjustment = penalized_notional * params.early_withdrawal_penalty * share;
        holding.stressed_amount = (holding.stressed_amount + adjustment).max(Decimal::ZERO);
    }
}

/// Value-weighted average liquidity period, weighted by post-stress values.
fn weighted_liquidity_days(stressed: &[StressedHolding], total: Decimal) -> f64 {
    if total <= Decimal::ZERO {
        return 0.0;
    }

    let weighted_sum: Decimal = stressed
        .iter()
        .map(|h| h.stressed_amount * Decimal::from(h.adjusted_liquidity_days))
        .sum();

    (weighted_sum / total).to_f64().unwrap_or(0.0)
}

/// Post-stress allocation by class; empty when the stressed total is zero.
fn allocation(
    stressed: &[StressedHolding],
    total: Decimal,
) -> BTreeMap<steward_portfolio::AssetClass, ClassBreakdown> {
    let mut result = BTreeMap::new();

    if total <= Decimal::ZERO {
        return result;
    }

    for holding in stressed {
        let entry = result
            .entry(holding.asset_class)
            .or_insert_with(|| ClassBreakdown {
                amount: Decimal::ZERO,
                fraction: 0.0,
                count: 0,
            });
        entry.amount += holding.stressed_amount;
        entry.count += 1;
    }

    for entry in result.values_mut() {
        entry.fraction = (entry.amount / total).to_f64().unwrap_or(0.0);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::StressParameters;
    use rust_decimal_macros::dec;
    use steward_portfolio::{AssetClass, AssetHolding};

    fn holding(class: AssetClass, amount: Decimal, days: u32) -> AssetHolding {
        AssetHolding::builder()
            .asset_class(class)
            .amount(amount)
            .fund_name(format!("{} holding", class.label()))
            .liquidity_period_days(days)
            .build()
            .unwrap()
    }

    fn reference_portfolio() -> Portfolio {
        Portfolio::builder("Reserves")
            .add_holding(holding(AssetClass::Cash, dec!(200_000), 0))
            .add_holding(holding(AssetClass::MoneyMarketFund, dec!(1_000_000), 2))
            .add_holding(holding(AssetClass::BondFund, dec!(350_000), 5))
            .add_holding(holding(AssetClass::MultiAssetFund, dec!(550_000), 30))
            .add_holding(holding(AssetClass::TimeDeposit, dec!(1_300_000), 180))
            .build()
            .unwrap()
    }

    fn profiles() -> &'static RiskProfileTable {
        RiskProfileTable::standard()
    }

    #[test]
    fn test_zero_shock_identity() {
        let portfolio = reference_portfolio();
        let metrics = evaluate(
            &portfolio,
            profiles(),
            &StressParameters::neutral(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(metrics.stressed_portfolio_value, dec!(3_400_000));
        assert_eq!(metrics.maximum_drawdown, 0.0);
        assert!(!metrics.volatility_breach);
    }

    #[test]
    fn test_rate_shock_spares_time_deposits() {
        let portfolio = Portfolio::builder("Deposits only")
            .add_holding(holding(AssetClass::TimeDeposit, dec!(1_000_000), 180))
            .build()
            .unwrap();

        let params = StressParameters::neutral().with_interest_rate_shock(dec!(-0.02));
        let metrics = evaluate(&portfolio, profiles(), &params, &EngineConfig::default()).unwrap();

        // A deposit's value does not move with rates during its term.
        assert_eq!(metrics.per_holding[0].stressed_amount, dec!(1_000_000));
    }

    #[test]
    fn test_rate_shock_scales_by_sensitivity() {
        let portfolio = Portfolio::builder("MMF only")
            .add_holding(holding(AssetClass::MoneyMarketFund, dec!(1_000_000), 2))
            .build()
            .unwrap();

        let params = StressParameters::neutral().with_interest_rate_shock(dec!(-0.01));
        let metrics = evaluate(&portfolio, profiles(), &params, &EngineConfig::default()).unwrap();

        // 1,000,000 x (1 - 0.01 x 0.9) = 991,000
        assert_eq!(metrics.per_holding[0].stressed_amount, dec!(991_000));
    }

    #[test]
    fn test_drawdown_only_hits_eligible_classes() {
        let portfolio = Portfolio::builder("Mixed")
            .add_holding(holding(AssetClass::BondFund, dec!(400_000), 5))
            .add_holding(holding(AssetClass::MultiAssetFund, dec!(600_000), 30))
            .build()
            .unwrap();

        let params = StressParameters::neutral().with_multi_asset_drawdown(dec!(-0.25));
        let metrics = evaluate(&portfolio, profiles(), &params, &EngineConfig::default()).unwrap();

        // Bond funds are not drawdown-eligible in the standard table.
        assert_eq!(metrics.per_holding[0].stressed_amount, dec!(400_000));
        // 600,000 x 0.75 = 450,000
        assert_eq!(metrics.per_holding[1].stressed_amount, dec!(450_000));
    }

    #[test]
    fn test_counterparty_shock_is_uniform() {
        let portfolio = reference_portfolio();
        let params = StressParameters::neutral().with_counterparty_risk_shock(dec!(0.05));
        let metrics = evaluate(&portfolio, profiles(), &params, &EngineConfig::default()).unwrap();

        for holding in &metrics.per_holding {
            assert_eq!(
                holding.stressed_amount,
                holding.original_amount * dec!(0.95),
                "{} should be written down 5%",
                holding.fund_name
            );
        }
    }

    #[test]
    fn test_stressed_value_floors_at_zero() {
        let portfolio = Portfolio::builder("Wipeout")
            .add_holding(holding(AssetClass::MultiAssetFund, dec!(100_000), 30))
            .build()
            .unwrap();

        // Out-of-range on purpose: the engine floors rather than re-validates.
        let params = StressParameters::neutral().with_multi_asset_drawdown(dec!(-1.5));
        let metrics = evaluate(&portfolio, profiles(), &params, &EngineConfig::default()).unwrap();

        assert_eq!(metrics.per_holding[0].stressed_amount, Decimal::ZERO);
        assert_eq!(metrics.stressed_portfolio_value, Decimal::ZERO);
    }

    #[test]
    fn test_freeze_skips_time_deposits() {
        let portfolio = reference_portfolio();
        let params = StressParameters::neutral().with_redemption_freeze_days(14);
        let metrics = evaluate(&portfolio, profiles(), &params, &EngineConfig::default()).unwrap();

        let days: Vec<u32> = metrics
            .per_holding
            .iter()
            .map(|h| h.adjusted_liquidity_days)
            .collect();

        // Cash, MMF, bond, and multi-asset pick up the freeze; the deposit's
        // maturity date does not move.
        assert_eq!(days, vec![14, 16, 19, 44, 180]);
    }

    #[test]
    fn test_penalty_skipped_when_liquidity_sufficient() {
        let portfolio = reference_portfolio();
        // 1,550,000 accessible within 30 days against 1,000,000 required: no gap.
        let config = EngineConfig::with_annual_opex(dec!(1_000_000));
        let params = StressParameters::neutral()
            .with_redemption_freeze_days(5)
            .with_early_withdrawal_penalty(dec!(-0.03));

        let metrics = evaluate(&portfolio, profiles(), &params, &config).unwrap();
        let deposit = metrics
            .per_holding
            .iter()
            .find(|h| h.asset_class == AssetClass::TimeDeposit)
            .unwrap();

        assert_eq!(deposit.stressed_amount, dec!(1_300_000));
    }

    #[test]
    fn test_penalty_applies_only_to_gap_portion() {
        let portfolio = reference_portfolio();
        let params = StressParameters::neutral().with_early_withdrawal_penalty(dec!(-0.01));
        let metrics =
            evaluate(&portfolio, profiles(), &params, &EngineConfig::default()).unwrap();

        // With no freeze the 30-day multi-asset sleeve still counts as
        // liquid: available = 2,100,000, gap = 300,000, loss = 3,000.
        let deposit = metrics
            .per_holding
            .iter()
            .find(|h| h.asset_class == AssetClass::TimeDeposit)
            .unwrap();
        assert_eq!(deposit.stressed_amount, dec!(1_297_000));
    }

    #[test]
    fn test_penalty_pro_rata_across_deposits() {
        let portfolio = Portfolio::builder("Two deposits")
            .add_holding(holding(AssetClass::TimeDeposit, dec!(300_000), 90))
            .add_holding(holding(AssetClass::TimeDeposit, dec!(900_000), 180))
            .build()
            .unwrap();

        let config = EngineConfig::with_annual_opex(dec!(600_000));
        let params = StressParameters::neutral().with_early_withdrawal_penalty(dec!(-0.02));
        let metrics = evaluate(&portfolio, profiles(), &params, &config).unwrap();

        // No liquid assets at all: gap = 600,000, split 1:3 across deposits.
        // Losses: 150,000 x 0.02 = 3,000 and 450,000 x 0.02 = 9,000.
        assert_eq!(metrics.per_holding[0].stressed_amount, dec!(297_000));
        assert_eq!(metrics.per_holding[1].stressed_amount, dec!(891_000));
    }

    #[test]
    fn test_gap_larger_than_deposits_penalizes_full_balance() {
        let portfolio = Portfolio::builder("Small deposit")
            .add_holding(holding(AssetClass::TimeDeposit, dec!(100_000), 180))
            .build()
            .unwrap();

        let params = StressParameters::neutral().with_early_withdrawal_penalty(dec!(-0.03));
        let metrics =
            evaluate(&portfolio, profiles(), &params, &EngineConfig::default()).unwrap();

        // Gap (2.4M) exceeds the deposit, so the whole balance is broken.
        assert_eq!(metrics.per_holding[0].stressed_amount, dec!(97_000));
    }

    #[test]
    fn test_liquidity_weighted_by_post_stress_values() {
        let portfolio = Portfolio::builder("Two sleeves")
            .add_holding(holding(AssetClass::Cash, dec!(500_000), 0))
            .add_holding(holding(AssetClass::MultiAssetFund, dec!(500_000), 30))
            .build()
            .unwrap();

        // Halve the multi-asset sleeve: weights shift toward cash.
        let params = StressParameters::neutral().with_multi_asset_drawdown(dec!(-0.50));
        let metrics =
            evaluate(&portfolio, profiles(), &params, &EngineConfig::default()).unwrap();

        // (500,000 x 0 + 250,000 x 30) / 750,000 = 10 days.
        assert!((metrics.time_to_liquidity_days - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_zero_portfolio() {
        let portfolio = Portfolio::builder("Empty").build().unwrap();
        let metrics = evaluate(
            &portfolio,
            profiles(),
            &StressParameters::neutral(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(metrics.stressed_portfolio_value, Decimal::ZERO);
        assert_eq!(metrics.reserve_coverage_ratio, 0.0);
        assert_eq!(metrics.maximum_drawdown, 0.0);
        assert_eq!(metrics.time_to_liquidity_days, 0.0);
        assert!(metrics.post_stress_allocation.is_empty());
    }

    #[test]
    fn test_invalid_opex_fails_fast() {
        let portfolio = reference_portfolio();
        let result = evaluate(
            &portfolio,
            profiles(),
            &StressParameters::neutral(),
            &EngineConfig::with_annual_opex(Decimal::ZERO),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_determinism() {
        let portfolio = reference_portfolio();
        let params = StressParameters::neutral()
            .with_interest_rate_shock(dec!(-0.015))
            .with_multi_asset_drawdown(dec!(-0.33))
            .with_redemption_freeze_days(14)
            .with_early_withdrawal_penalty(dec!(-0.01));
        let config = EngineConfig::default();

        let first = evaluate(&portfolio, profiles(), &params, &config).unwrap();
        let second = evaluate(&portfolio, profiles(), &params, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_allocation_fractions_sum_to_one() {
        let portfolio = reference_portfolio();
        let params = StressParameters::neutral()
            .with_multi_asset_drawdown(dec!(-0.40))
            .with_counterparty_risk_shock(dec!(0.02));
        let metrics =
            evaluate(&portfolio, profiles(), &params, &EngineConfig::default()).unwrap();

        let total: f64 = metrics
            .post_stress_allocation
            .values()
            .map(|b| b.fraction)
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
