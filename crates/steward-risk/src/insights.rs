//! Actionable insights derived from a metrics record.

use crate::config::EngineConfig;
use crate::metrics::StressMetrics;
use serde::{Deserialize, Serialize};

/// How urgently an insight should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InsightSeverity {
    /// A favorable observation.
    Positive,
    /// Worth knowing, no action implied.
    Notice,
    /// Needs attention.
    Warning,
    /// A breached threshold.
    Critical,
}

/// One human-readable observation about a stress result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Urgency of the observation.
    pub severity: InsightSeverity,

    /// The observation itself.
    pub message: String,
}

impl Insight {
    fn new(severity: InsightSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Derives the summary insights for one stress result.
///
/// Pure function of the metrics and the configuration they were computed
/// under; ordering is stable: reserves, volatility, liquidity,
/// concentration, then the all-clear.
#[must_use]
pub fn generate_summary_insights(metrics: &StressMetrics, config: &EngineConfig) -> Vec<Insight> {
    let mut insights = Vec::new();
    let months = f64::from(config.reserve_months_required);

    if metrics.reserve_coverage_ratio < 1.0 {
        let shortfall = (1.0 - metrics.reserve_coverage_ratio) * months;
        insights.push(Insight::new(
            InsightSeverity::Warning,
            format!(
                "Reserve shortfall: {shortfall:.1} months below requirement under stress"
            ),
        ));
    } else if metrics.reserve_coverage_ratio > 1.5 {
        let excess = (metrics.reserve_coverage_ratio - 1.0) * months;
        insights.push(Insight::new(
            InsightSeverity::Positive,
            format!("Strong reserve position: {excess:.1} months above requirement"),
        ));
    }

    if metrics.volatility_breach {
        insights.push(Insight::new(
            InsightSeverity::Critical,
            format!(
                "High volatility risk: {:.1}% portfolio decline exceeds {:.0}% threshold",
                metrics.maximum_drawdown * 100.0,
                config.thresholds.volatility_breach * 100.0
            ),
        ));
    }

    if metrics.liquidity_breach {
        insights.push(Insight::new(
            InsightSeverity::Critical,
            format!(
                "Liquidity concern: {:.0} days to access funds exceeds {:.0} day threshold",
                metrics.time_to_liquidity_days, config.thresholds.liquidity_breach_days
            ),
        ));
    }

    for (class, breakdown) in &metrics.post_stress_allocation {
        if breakdown.fraction > 0.5 {
            insights.push(Insight::new(
                InsightSeverity::Notice,
                format!(
                    "High concentration: {:.1}% in {}",
                    breakdown.fraction * 100.0,
                    class.label()
                ),
            ));
        }
    }

    if !metrics.any_breach() {
        insights.push(Insight::new(
            InsightSeverity::Positive,
            "Portfolio demonstrates resilience under current stress scenario",
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::evaluate;
    use crate::params::StressParameters;
    use crate::profiles::RiskProfileTable;
    use rust_decimal_macros::dec;
    use steward_portfolio::{AssetClass, AssetHolding, Portfolio};

    fn portfolio_of(class: AssetClass, amount: rust_decimal::Decimal, days: u32) -> Portfolio {
        Portfolio::builder("Reserves")
            .add_holding(
                AssetHolding::builder()
                    .asset_class(class)
                    .amount(amount)
                    .liquidity_period_days(days)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_shortfall_warning() {
        let portfolio = portfolio_of(AssetClass::Cash, dec!(1_200_000), 0);
        let metrics = evaluate(
            &portfolio,
            RiskProfileTable::standard(),
            &StressParameters::neutral(),
            &EngineConfig::default(),
        )
        .unwrap();

        let insights = generate_summary_insights(&metrics, &EngineConfig::default());

        // Coverage 0.5 -> 6.0 months short.
        let shortfall = insights
            .iter()
            .find(|i| i.severity == InsightSeverity::Warning)
            .unwrap();
        assert!(shortfall.message.contains("6.0 months below"));
    }

    #[test]
    fn test_strong_position_and_concentration() {
        let portfolio = portfolio_of(AssetClass::Cash, dec!(4_800_000), 0);
        let metrics = evaluate(
            &portfolio,
            RiskProfileTable::standard(),
            &StressParameters::neutral(),
            &EngineConfig::default(),
        )
        .unwrap();

        let insights = generate_summary_insights(&metrics, &EngineConfig::default());

        // Coverage 2.0 -> 12 months above requirement, all in one class.
        assert!(insights
            .iter()
            .any(|i| i.severity == InsightSeverity::Positive
                && i.message.contains("12.0 months above")));
        assert!(insights
            .iter()
            .any(|i| i.severity == InsightSeverity::Notice
                && i.message.contains("Cash & Equivalents")));
    }

    #[test]
    fn test_liquidity_breach_is_critical() {
        let portfolio = portfolio_of(AssetClass::TimeDeposit, dec!(2_400_000), 180);
        let metrics = evaluate(
            &portfolio,
            RiskProfileTable::standard(),
            &StressParameters::neutral(),
            &EngineConfig::default(),
        )
        .unwrap();

        let insights = generate_summary_insights(&metrics, &EngineConfig::default());
        assert!(insights
            .iter()
            .any(|i| i.severity == InsightSeverity::Critical
                && i.message.contains("days to access funds")));
    }

    #[test]
    fn test_all_clear_when_no_breach() {
        let portfolio = portfolio_of(AssetClass::Cash, dec!(3_000_000), 0);
        let metrics = evaluate(
            &portfolio,
            RiskProfileTable::standard(),
            &StressParameters::neutral(),
            &EngineConfig::default(),
        )
        .unwrap();

        let insights = generate_summary_insights(&metrics, &EngineConfig::default());
        assert!(insights
            .iter()
            .any(|i| i.message.contains("resilience")));
    }
}
