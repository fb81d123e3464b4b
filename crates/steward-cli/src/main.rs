//! Steward CLI - reserve portfolio stress testing.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate a preset scenario
//! steward evaluate --scenario "COVID-19 Scenario"
//!
//! # Evaluate custom shocks
//! steward evaluate --rate-shock -0.015 --drawdown -0.30 --freeze-days 14
//!
//! # Compare all presets
//! steward compare
//!
//! # Show the portfolio and market context
//! steward portfolio
//! steward market
//!
//! # Write a report file
//! steward report --scenario Conservative --out-dir reports
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr so table/JSON output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Evaluate(args) => commands::evaluate::execute(args, format, config_path)?,
        Commands::Compare(args) => commands::compare::execute(args, format, config_path)?,
        Commands::Portfolio(args) => commands::portfolio::execute(args, format, config_path)?,
        Commands::Market(args) => commands::market::execute(args, format, config_path)?,
        Commands::Report(args) => commands::report::execute(args, format, config_path)?,
    }

    Ok(())
}
