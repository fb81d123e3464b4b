//! Named stress scenarios and batch comparison.
//!
//! A scenario is a name plus one parameter set. The preset registry mirrors
//! the scenarios the reference deployment shipped; custom scenarios are
//! built from slider values and compared the same way.

use crate::config::EngineConfig;
use crate::engine::evaluate;
use crate::error::{RiskError, RiskResult};
use crate::metrics::StressMetrics;
use crate::params::StressParameters;
use crate::profiles::RiskProfileTable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use steward_portfolio::Portfolio;

/// A named stress scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressScenario {
    /// Scenario name.
    pub name: String,

    /// Description.
    pub description: Option<String>,

    /// The parameter set this scenario applies.
    pub params: StressParameters,
}

impl StressScenario {
    /// Creates a new scenario.
    #[must_use]
    pub fn new(name: impl Into<String>, params: StressParameters) -> Self {
        Self {
            name: name.into(),
            description: None,
            params,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Result of evaluating one named scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// The scenario that was evaluated.
    pub scenario: StressScenario,

    /// The metrics it produced.
    pub metrics: StressMetrics,
}

/// Evaluates each scenario independently, preserving input order.
///
/// Scenarios share no state: this is a plain batch wrapper over
/// [`evaluate`], which is also why cross-factor correlation is out of
/// scope - each entry is a single deterministic point evaluation.
///
/// # Errors
///
/// Fails on the first scenario whose evaluation fails; scenario inputs are
/// all-or-nothing for a comparison run.
pub fn compare_scenarios(
    portfolio: &Portfolio,
    profiles: &RiskProfileTable,
    scenarios: &[StressScenario],
    config: &EngineConfig,
) -> RiskResult<Vec<ScenarioResult>> {
    scenarios
        .iter()
        .map(|scenario| {
            evaluate(portfolio, profiles, &scenario.params, config).map(|metrics| ScenarioResult {
                scenario: scenario.clone(),
                metrics,
            })
        })
        .collect()
}

/// Returns the scenario with the deepest drawdown.
#[must_use]
pub fn worst_case(results: &[ScenarioResult]) -> Option<&ScenarioResult> {
    results.iter().max_by(|a, b| {
        a.metrics
            .maximum_drawdown
            .partial_cmp(&b.metrics.maximum_drawdown)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Returns the scenario with the shallowest drawdown.
#[must_use]
pub fn best_case(results: &[ScenarioResult]) -> Option<&ScenarioResult> {
    results.iter().min_by(|a, b| {
        a.metrics
            .maximum_drawdown
            .partial_cmp(&b.metrics.maximum_drawdown)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Preset scenarios shipped with the reference deployment.
pub mod presets {
    use super::*;

    /// Conservative stress: mild rate dip, moderate drawdown.
    #[must_use]
    pub fn conservative() -> StressScenario {
        StressScenario::new(
            "Conservative",
            StressParameters::neutral()
                .with_interest_rate_shock(Decimal::new(-5, 3))
                .with_inflation_spike(Decimal::new(4, 2))
                .with_multi_asset_drawdown(Decimal::new(-15, 2))
                .with_redemption_freeze_days(5)
                .with_early_withdrawal_penalty(Decimal::new(-5, 3)),
        )
        .with_description("Mild rate dip with a contained market pullback")
    }

    /// Moderate stress: wider drawdown, two-week freeze.
    #[must_use]
    pub fn moderate_stress() -> StressScenario {
        StressScenario::new(
            "Moderate Stress",
            StressParameters::neutral()
                .with_interest_rate_shock(Decimal::new(-15, 3))
                .with_inflation_spike(Decimal::new(6, 2))
                .with_multi_asset_drawdown(Decimal::new(-25, 2))
                .with_redemption_freeze_days(15)
                .with_early_withdrawal_penalty(Decimal::new(-15, 3)),
        )
        .with_description("Sustained market stress with redemption queues")
    }

    /// Severe crisis: deep drawdown, month-long freeze, counterparty loss.
    #[must_use]
    pub fn severe_crisis() -> StressScenario {
        StressScenario::new(
            "Severe Crisis",
            StressParameters::neutral()
                .with_interest_rate_shock(Decimal::new(-2, 2))
                .with_inflation_spike(Decimal::new(8, 2))
                .with_multi_asset_drawdown(Decimal::new(-40, 2))
                .with_redemption_freeze_days(30)
                .with_early_withdrawal_penalty(Decimal::new(-25, 3))
                .with_counterparty_risk_shock(Decimal::new(5, 2)),
        )
        .with_description("Systemic crisis with institutional failure")
    }

    /// Calibrated to the 2008 financial crisis.
    #[must_use]
    pub fn financial_crisis_2008() -> StressScenario {
        StressScenario::new(
            "2008 Financial Crisis",
            StressParameters::neutral()
                .with_interest_rate_shock(Decimal::new(-2, 2))
                .with_inflation_spike(Decimal::new(35, 3))
                .with_multi_asset_drawdown(Decimal::new(-37, 2))
                .with_redemption_freeze_days(21)
                .with_early_withdrawal_penalty(Decimal::new(-2, 2))
                .with_counterparty_risk_shock(Decimal::new(2, 2)),
        )
        .with_description("Replay of the 2008 global financial crisis")
    }

    /// Calibrated to the COVID-19 market shock of March 2020.
    #[must_use]
    pub fn covid_19() -> StressScenario {
        StressScenario::new(
            "COVID-19 Scenario",
            StressParameters::neutral()
                .with_interest_rate_shock(Decimal::new(-15, 3))
                .with_inflation_spike(Decimal::new(2, 2))
                .with_multi_asset_drawdown(Decimal::new(-33, 2))
                .with_redemption_freeze_days(14)
                .with_early_withdrawal_penalty(Decimal::new(-1, 2)),
        )
        .with_description("Replay of the March 2020 pandemic shock")
    }

    /// Returns all preset scenarios, in display order.
    #[must_use]
    pub fn all() -> Vec<StressScenario> {
        vec![
            conservative(),
            moderate_stress(),
            severe_crisis(),
            financial_crisis_2008(),
            covid_19(),
        ]
    }

    /// Finds a preset by name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::ScenarioNotFound`] when no preset matches.
    pub fn find(name: &str) -> RiskResult<StressScenario> {
        all()
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| RiskError::scenario_not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use steward_portfolio::{AssetClass, AssetHolding};

    fn sample_portfolio() -> Portfolio {
        Portfolio::builder("Reserves")
            .add_holding(
                AssetHolding::builder()
                    .asset_class(AssetClass::Cash)
                    .amount(dec!(500_000))
                    .liquidity_period_days(0)
                    .build()
                    .unwrap(),
            )
            .add_holding(
                AssetHolding::builder()
                    .asset_class(AssetClass::MultiAssetFund)
                    .amount(dec!(500_000))
                    .liquidity_period_days(30)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_preset_registry() {
        let presets = presets::all();
        assert_eq!(presets.len(), 5);

        let names: Vec<&str> = presets.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"Conservative"));
        assert!(names.contains(&"2008 Financial Crisis"));
        assert!(names.contains(&"COVID-19 Scenario"));
    }

    #[test]
    fn test_preset_values() {
        let covid = presets::covid_19();
        assert_eq!(covid.params.interest_rate_shock, dec!(-0.015));
        assert_eq!(covid.params.multi_asset_drawdown, dec!(-0.33));
        assert_eq!(covid.params.redemption_freeze_days, 14);
        assert_eq!(covid.params.counterparty_risk_shock, Decimal::ZERO);

        let crisis = presets::financial_crisis_2008();
        assert_eq!(crisis.params.multi_asset_drawdown, dec!(-0.37));
        assert_eq!(crisis.params.redemption_freeze_days, 21);
        assert_eq!(crisis.params.counterparty_risk_shock, dec!(0.02));
    }

    #[test]
    fn test_find_preset_case_insensitive() {
        assert!(presets::find("conservative").is_ok());
        assert!(presets::find("  COVID-19 scenario ").is_ok());
        assert!(presets::find("Meteor Strike").is_err());
    }

    #[test]
    fn test_compare_preserves_order_and_names() {
        let portfolio = sample_portfolio();
        let scenarios = presets::all();
        let results = compare_scenarios(
            &portfolio,
            RiskProfileTable::standard(),
            &scenarios,
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(results.len(), scenarios.len());
        for (scenario, result) in scenarios.iter().zip(&results) {
            assert_eq!(scenario.name, result.scenario.name);
        }
    }

    #[test]
    fn test_scenarios_are_independent() {
        let portfolio = sample_portfolio();
        let scenarios = vec![presets::severe_crisis(), presets::conservative()];
        let batch = compare_scenarios(
            &portfolio,
            RiskProfileTable::standard(),
            &scenarios,
            &EngineConfig::default(),
        )
        .unwrap();

        // A batch run matches the same scenario evaluated alone.
        let alone = evaluate(
            &portfolio,
            RiskProfileTable::standard(),
            &presets::conservative().params,
            &EngineConfig::default(),
        )
        .unwrap();
        assert_eq!(batch[1].metrics, alone);
    }

    #[test]
    fn test_worst_and_best_case() {
        let portfolio = sample_portfolio();
        let results = compare_scenarios(
            &portfolio,
            RiskProfileTable::standard(),
            &presets::all(),
            &EngineConfig::default(),
        )
        .unwrap();

        let worst = worst_case(&results).unwrap();
        let best = best_case(&results).unwrap();

        assert!(worst.metrics.maximum_drawdown >= best.metrics.maximum_drawdown);
        assert_eq!(worst.scenario.name, "Severe Crisis");
        assert_eq!(best.scenario.name, "Conservative");
    }
}
