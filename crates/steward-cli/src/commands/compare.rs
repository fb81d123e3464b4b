//! Compare command implementation.
//!
//! Evaluates the preset scenarios (or a chosen subset) side by side.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{load_app, load_portfolio_from};
use crate::output::{print_header, print_output, print_single, print_warning};
use steward_report::{format_pct, format_sgd};
use steward_risk::{compare_scenarios, presets, worst_case, ScenarioResult, StressScenario};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Scenario names to include (defaults to all presets)
    #[arg(short, long)]
    scenario: Vec<String>,

    /// Portfolio CSV path (overrides the configured file)
    #[arg(short, long)]
    portfolio: Option<PathBuf>,
}

/// One comparison row.
#[derive(Debug, Tabled, serde::Serialize)]
struct ScenarioRow {
    #[tabled(rename = "Scenario")]
    scenario: String,
    #[tabled(rename = "Stressed Value")]
    stressed_value: String,
    #[tabled(rename = "Drawdown")]
    drawdown: String,
    #[tabled(rename = "Coverage")]
    coverage: String,
    #[tabled(rename = "Liquidity (days)")]
    liquidity_days: String,
    #[tabled(rename = "Breaches")]
    breaches: String,
}

impl From<&ScenarioResult> for ScenarioRow {
    fn from(result: &ScenarioResult) -> Self {
        let metrics = &result.metrics;
        let breaches = match (metrics.volatility_breach, metrics.liquidity_breach) {
            (false, false) => "-".to_string(),
            (true, false) => "volatility".to_string(),
            (false, true) => "liquidity".to_string(),
            (true, true) => "volatility, liquidity".to_string(),
        };

        Self {
            scenario: result.scenario.name.clone(),
            stressed_value: format_sgd(metrics.stressed_portfolio_value),
            drawdown: format_pct(metrics.maximum_drawdown),
            coverage: format!("{:.2}x", metrics.reserve_coverage_ratio),
            liquidity_days: format!("{:.1}", metrics.time_to_liquidity_days),
            breaches,
        }
    }
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, format: OutputFormat, config_path: Option<&Path>) -> Result<()> {
    let (config, profiles) = load_app(config_path)?;
    let portfolio = load_portfolio_from(&config, args.portfolio.as_ref(), &profiles)?;

    let scenarios: Vec<StressScenario> = if args.scenario.is_empty() {
        presets::all()
    } else {
        args.scenario
            .iter()
            .map(|name| presets::find(name))
            .collect::<Result<_, _>>()?
    };

    let results = compare_scenarios(&portfolio, &profiles, &scenarios, &config.engine_config())?;

    match format {
        OutputFormat::Json => print_single(&results),
        OutputFormat::Minimal => {
            let rows: Vec<ScenarioRow> = results.iter().map(ScenarioRow::from).collect();
            print_output(&rows, OutputFormat::Minimal)
        }
        OutputFormat::Table | OutputFormat::Csv => {
            print_header(&format!(
                "Scenario comparison - {} ({})",
                portfolio.name,
                format_sgd(portfolio.total_value())
            ));
            let rows: Vec<ScenarioRow> = results.iter().map(ScenarioRow::from).collect();
            print_output(&rows, format)?;

            if format == OutputFormat::Table {
                if let Some(worst) = worst_case(&results) {
                    print_warning(&format!(
                        "Worst case: {} ({} drawdown)",
                        worst.scenario.name,
                        format_pct(worst.metrics.maximum_drawdown)
                    ));
                }
            }
            Ok(())
        }
    }
}
