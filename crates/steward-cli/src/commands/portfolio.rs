//! Portfolio command implementation.
//!
//! Shows the loaded portfolio and optionally exports a backup copy.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{load_app, load_portfolio_from};
use crate::output::{print_header, print_output, print_single, print_success};
use steward_data::save_portfolio;
use steward_report::format_sgd;

/// Arguments for the portfolio command.
#[derive(Args, Debug)]
pub struct PortfolioArgs {
    /// Portfolio CSV path (overrides the configured file)
    #[arg(short, long)]
    portfolio: Option<PathBuf>,

    /// Export a backup copy to this path
    #[arg(long)]
    export: Option<PathBuf>,
}

/// One holding row.
#[derive(Debug, Tabled, serde::Serialize)]
struct PortfolioRow {
    #[tabled(rename = "Holding")]
    holding: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Liquidity (days)")]
    liquidity_days: u32,
    #[tabled(rename = "Notes")]
    notes: String,
}

/// One allocation row.
#[derive(Debug, Tabled, serde::Serialize)]
struct AllocationRow {
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Holdings")]
    holdings: usize,
}

/// Execute the portfolio command.
pub fn execute(args: PortfolioArgs, format: OutputFormat, config_path: Option<&Path>) -> Result<()> {
    let (config, profiles) = load_app(config_path)?;
    let portfolio = load_portfolio_from(&config, args.portfolio.as_ref(), &profiles)?;

    if let Some(export_path) = &args.export {
        save_portfolio(&portfolio, export_path)?;
        print_success(&format!("Exported portfolio to {}", export_path.display()));
    }

    match format {
        OutputFormat::Json => print_single(&portfolio),
        OutputFormat::Minimal => print_single(&serde_json::json!({
            "name": portfolio.name,
            "holdings": portfolio.holding_count(),
            "total_value": portfolio.total_value(),
        })),
        OutputFormat::Table | OutputFormat::Csv => {
            print_header(&format!(
                "{} - total {}",
                portfolio.name,
                format_sgd(portfolio.total_value())
            ));

            let rows: Vec<PortfolioRow> = portfolio
                .holdings
                .iter()
                .map(|h| PortfolioRow {
                    holding: h.fund_name.clone(),
                    class: h.asset_class.label().to_string(),
                    amount: format_sgd(h.amount),
                    liquidity_days: h.liquidity_period_days,
                    notes: h.notes.clone(),
                })
                .collect();
            print_output(&rows, format)?;

            if format == OutputFormat::Table {
                print_header("Allocation");
                let allocation: Vec<AllocationRow> = portfolio
                    .breakdown()
                    .iter()
                    .map(|(class, breakdown)| AllocationRow {
                        class: class.label().to_string(),
                        amount: format_sgd(breakdown.amount),
                        share: format!("{:.1}%", breakdown.fraction * 100.0),
                        holdings: breakdown.count,
                    })
                    .collect();
                print_output(&allocation, format)?;
            }
            Ok(())
        }
    }
}
