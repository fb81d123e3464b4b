//! Evaluate command implementation.
//!
//! Runs one stress scenario against the portfolio and prints the full
//! metrics record with insights.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde_json::json;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{load_app, load_portfolio_from, ScenarioArgs};
use crate::output::{print_header, print_insights, print_output, print_single, KeyValue};
use steward_report::{format_pct, format_sgd};
use steward_risk::{evaluate, generate_summary_insights, StressMetrics};

/// Arguments for the evaluate command.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Portfolio CSV path (overrides the configured file)
    #[arg(short, long)]
    portfolio: Option<PathBuf>,
}

/// A per-holding row for the stress table.
#[derive(Debug, Tabled, serde::Serialize)]
struct HoldingRow {
    #[tabled(rename = "Holding")]
    holding: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Original")]
    original: String,
    #[tabled(rename = "Stressed")]
    stressed: String,
    #[tabled(rename = "Days to Cash")]
    days: u32,
}

/// Execute the evaluate command.
pub fn execute(args: EvaluateArgs, format: OutputFormat, config_path: Option<&Path>) -> Result<()> {
    let (config, profiles) = load_app(config_path)?;
    let portfolio = load_portfolio_from(&config, args.portfolio.as_ref(), &profiles)?;
    let scenario = args.scenario.resolve()?;

    let engine_config = config.engine_config();
    let metrics = evaluate(&portfolio, &profiles, &scenario.params, &engine_config)?;
    let insights = generate_summary_insights(&metrics, &engine_config);

    match format {
        OutputFormat::Json => print_single(&json!({
            "scenario": scenario,
            "metrics": metrics,
            "insights": insights,
        })),
        OutputFormat::Minimal => print_single(&json!({
            "scenario": scenario.name,
            "stressed_portfolio_value": metrics.stressed_portfolio_value,
            "maximum_drawdown": metrics.maximum_drawdown,
            "reserve_coverage_ratio": metrics.reserve_coverage_ratio,
            "time_to_liquidity_days": metrics.time_to_liquidity_days,
            "volatility_breach": metrics.volatility_breach,
            "liquidity_breach": metrics.liquidity_breach,
        })),
        OutputFormat::Table | OutputFormat::Csv => {
            print_header(&format!("Scenario: {}", scenario.name));
            print_output(&metric_rows(&metrics), format)?;

            if format == OutputFormat::Table {
                print_header("Holdings under stress");
                let rows: Vec<HoldingRow> = metrics
                    .per_holding
                    .iter()
                    .map(|h| HoldingRow {
                        holding: h.fund_name.clone(),
                        class: h.asset_class.label().to_string(),
                        original: format_sgd(h.original_amount),
                        stressed: format_sgd(h.stressed_amount),
                        days: h.adjusted_liquidity_days,
                    })
                    .collect();
                print_output(&rows, format)?;

                print_header("Insights");
                print_insights(&insights);
            }
            Ok(())
        }
    }
}

fn metric_rows(metrics: &StressMetrics) -> Vec<KeyValue> {
    vec![
        KeyValue::new(
            "Original portfolio value",
            format_sgd(metrics.original_portfolio_value),
        ),
        KeyValue::new(
            "Stressed portfolio value",
            format_sgd(metrics.stressed_portfolio_value),
        ),
        KeyValue::new("Maximum drawdown", format_pct(metrics.maximum_drawdown)),
        KeyValue::new(
            "Reserve coverage",
            format!(
                "{:.2}x ({:.1} months)",
                metrics.reserve_coverage_ratio, metrics.reserve_months_covered
            ),
        ),
        KeyValue::new(
            "Time to liquidity",
            format!("{:.1} days", metrics.time_to_liquidity_days),
        ),
        KeyValue::new(
            "Volatility breach",
            if metrics.volatility_breach { "YES" } else { "no" }.to_string(),
        ),
        KeyValue::new(
            "Liquidity breach",
            if metrics.liquidity_breach { "YES" } else { "no" }.to_string(),
        ),
    ]
}
