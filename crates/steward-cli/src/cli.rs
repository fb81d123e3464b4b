//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{
    CompareArgs, EvaluateArgs, MarketArgs, PortfolioArgs, ReportArgs,
};

/// Steward - reserve portfolio stress testing
#[derive(Parser)]
#[command(name = "steward")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Path to the application configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one stress scenario against the portfolio
    Evaluate(EvaluateArgs),

    /// Compare the preset scenarios side by side
    Compare(CompareArgs),

    /// Show or export the portfolio
    Portfolio(PortfolioArgs),

    /// Show market reference data
    Market(MarketArgs),

    /// Write a stress-test report file
    Report(ReportArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline numbers)
    Minimal,
}
