//! CLI command implementations.

pub mod compare;
pub mod evaluate;
pub mod market;
pub mod portfolio;
pub mod report;

// Re-export argument types for convenience
pub use compare::CompareArgs;
pub use evaluate::EvaluateArgs;
pub use market::MarketArgs;
pub use portfolio::PortfolioArgs;
pub use report::ReportArgs;

use std::path::{Path, PathBuf};

use clap::Args;
use rust_decimal::Decimal;

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use steward_data::load_portfolio;
use steward_portfolio::Portfolio;
use steward_risk::{presets, ParameterRanges, RiskProfileTable, StressScenario};

/// Scenario selection shared by `evaluate` and `report`.
///
/// Either a preset name, or a custom scenario assembled from the shock
/// flags; flags on top of a preset override just those fields. Values are
/// clamped to the documented parameter ranges, the same way the dashboard
/// sliders are.
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Preset scenario name (e.g. "Conservative", "COVID-19 Scenario")
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Interest-rate shock as a fraction (e.g. -0.015 for -1.5%)
    #[arg(long, allow_hyphen_values = true)]
    pub rate_shock: Option<f64>,

    /// Inflation spike as a fraction
    #[arg(long)]
    pub inflation: Option<f64>,

    /// Multi-asset drawdown as a fraction (e.g. -0.33)
    #[arg(long, allow_hyphen_values = true)]
    pub drawdown: Option<f64>,

    /// Redemption freeze in days
    #[arg(long)]
    pub freeze_days: Option<u32>,

    /// Early-withdrawal penalty as a fraction (e.g. -0.01)
    #[arg(long, allow_hyphen_values = true)]
    pub penalty: Option<f64>,

    /// Counterparty risk shock as a fraction
    #[arg(long)]
    pub counterparty: Option<f64>,
}

impl ScenarioArgs {
    /// Resolves the flags into a concrete scenario.
    pub fn resolve(&self) -> CliResult<StressScenario> {
        let mut scenario = match &self.scenario {
            Some(name) => presets::find(name)?,
            None => StressScenario::new(
                "Custom",
                steward_risk::StressParameters::neutral(),
            ),
        };

        let ranges = ParameterRanges::documented();
        let params = &mut scenario.params;

        if let Some(v) = self.rate_shock {
            params.interest_rate_shock = ranges.interest_rate_shock.clamp(to_fraction(v)?);
        }
        if let Some(v) = self.inflation {
            params.inflation_spike = ranges.inflation_spike.clamp(to_fraction(v)?);
        }
        if let Some(v) = self.drawdown {
            params.multi_asset_drawdown = ranges.multi_asset_drawdown.clamp(to_fraction(v)?);
        }
        if let Some(v) = self.freeze_days {
            params.redemption_freeze_days =
                v.clamp(ranges.redemption_freeze_days.min, ranges.redemption_freeze_days.max);
        }
        if let Some(v) = self.penalty {
            params.early_withdrawal_penalty =
                ranges.early_withdrawal_penalty.clamp(to_fraction(v)?);
        }
        if let Some(v) = self.counterparty {
            params.counterparty_risk_shock =
                ranges.counterparty_risk_shock.clamp(to_fraction(v)?);
        }

        Ok(scenario)
    }
}

/// Converts a shock flag into a decimal fraction.
pub fn to_fraction(value: f64) -> CliResult<Decimal> {
    if !value.is_finite() || value.abs() > 1.0 {
        return Err(CliError::InvalidFraction(value));
    }
    Decimal::try_from(value).map_err(|_| CliError::InvalidFraction(value))
}

/// Loads the application configuration and risk-profile table.
pub fn load_app(config_path: Option<&Path>) -> CliResult<(AppConfig, RiskProfileTable)> {
    let config = AppConfig::load(config_path)?;
    let profiles = config.profile_table()?;
    Ok((config, profiles))
}

/// Loads the portfolio from the override path or the configured file.
pub fn load_portfolio_from(
    config: &AppConfig,
    override_path: Option<&PathBuf>,
    profiles: &RiskProfileTable,
) -> CliResult<Portfolio> {
    let path = override_path
        .cloned()
        .unwrap_or_else(|| PathBuf::from(&config.portfolio_file));
    load_portfolio(path, profiles).map_err(CliError::from)
}
