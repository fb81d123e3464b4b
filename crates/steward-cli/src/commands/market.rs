//! Market command implementation.
//!
//! Shows the market reference data the dashboard sidebar displays: the
//! Singapore rate complex, index levels, and per-class expected returns.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::load_app;
use crate::output::{print_header, print_output, print_single, KeyValue};
use steward_data::{expected_returns, MarketDataStore, ReferenceProvider};
use steward_portfolio::AssetClass;

/// Arguments for the market command.
#[derive(Args, Debug)]
pub struct MarketArgs {
    /// Bypass the cache and refresh from the provider
    #[arg(long)]
    refresh: bool,
}

/// One index row.
#[derive(Debug, Tabled, serde::Serialize)]
struct IndexRow {
    #[tabled(rename = "Index")]
    index: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "1Y Return")]
    one_year_return: String,
    #[tabled(rename = "Volatility")]
    volatility: String,
}

/// One expected-return row.
#[derive(Debug, Tabled, serde::Serialize)]
struct ReturnRow {
    #[tabled(rename = "Asset Class")]
    class: String,
    #[tabled(rename = "Proxy")]
    proxy: String,
    #[tabled(rename = "Expected 1Y Return")]
    expected: String,
}

/// Execute the market command.
pub fn execute(args: MarketArgs, format: OutputFormat, config_path: Option<&Path>) -> Result<()> {
    let (config, _profiles) = load_app(config_path)?;

    let store = MarketDataStore::new(&config.cache_dir)?;
    let outcome = store.fetch(&ReferenceProvider, args.refresh)?;
    let snapshot = &outcome.snapshot;

    match format {
        OutputFormat::Json | OutputFormat::Minimal => print_single(snapshot),
        OutputFormat::Table | OutputFormat::Csv => {
            print_header(&format!(
                "Market data ({}, updated {})",
                outcome.provenance,
                snapshot.last_updated.format("%Y-%m-%d %H:%M UTC")
            ));

            let rates = &snapshot.singapore_rates;
            let rate_rows = vec![
                KeyValue::new("SORA", format_rate(rates.sora_rate)),
                KeyValue::new("3M Treasury", format_rate(rates.treasury_3m)),
                KeyValue::new("6M Treasury", format_rate(rates.treasury_6m)),
                KeyValue::new("12M Treasury", format_rate(rates.treasury_12m)),
                KeyValue::new("Average FD", format_rate(rates.fd_rates_average)),
            ];
            print_output(&rate_rows, format)?;

            if format == OutputFormat::Table {
                print_header("Indices");
                let index_rows: Vec<IndexRow> = snapshot
                    .market_indices
                    .iter()
                    .map(|(symbol, quote)| IndexRow {
                        index: symbol.clone(),
                        level: format!("{:.1}", quote.level),
                        one_year_return: format_rate(quote.one_year_return),
                        volatility: format_rate(quote.volatility),
                    })
                    .collect();
                print_output(&index_rows, format)?;

                print_header("Expected returns by asset class");
                let returns = expected_returns(snapshot, 1.0);
                let return_rows: Vec<ReturnRow> = AssetClass::ALL
                    .iter()
                    .map(|class| ReturnRow {
                        class: class.label().to_string(),
                        proxy: steward_data::asset_proxy(*class).to_string(),
                        expected: format_rate(returns[class]),
                    })
                    .collect();
                print_output(&return_rows, format)?;
            }
            Ok(())
        }
    }
}

fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}
