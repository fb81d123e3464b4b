//! Report command implementation.
//!
//! Evaluates a scenario and writes the rendered report under the
//! standardized filename.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use clap::Args;

use crate::cli::OutputFormat;
use crate::commands::{load_app, load_portfolio_from, ScenarioArgs};
use crate::output::{print_single, print_success};
use steward_report::{render_bytes, ReportDocument};
use steward_risk::{evaluate, generate_summary_insights};

/// Arguments for the report command.
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Portfolio CSV path (overrides the configured file)
    #[arg(short, long)]
    portfolio: Option<PathBuf>,

    /// Directory to write the report into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

/// Execute the report command.
pub fn execute(args: ReportArgs, format: OutputFormat, config_path: Option<&Path>) -> Result<()> {
    let (config, profiles) = load_app(config_path)?;
    let portfolio = load_portfolio_from(&config, args.portfolio.as_ref(), &profiles)?;
    let scenario = args.scenario.resolve()?;

    let engine_config = config.engine_config();
    let metrics = evaluate(&portfolio, &profiles, &scenario.params, &engine_config)?;
    let insights = generate_summary_insights(&metrics, &engine_config);

    let document = ReportDocument::builder()
        .title(config.report_title.clone())
        .org_prefix(config.report_prefix.clone())
        .generated_at(Utc::now())
        .scenario(scenario)
        .config(engine_config)
        .metrics(metrics)
        .insights(insights)
        .build()
        .ok_or_else(|| anyhow::anyhow!("report document missing required parts"))?;

    fs::create_dir_all(&args.out_dir)?;
    let path = args.out_dir.join(document.filename("txt"));
    fs::write(&path, render_bytes(&document))?;

    match format {
        OutputFormat::Json | OutputFormat::Minimal => print_single(&serde_json::json!({
            "file": path.display().to_string(),
            "scenario": document.scenario.name,
        })),
        OutputFormat::Table | OutputFormat::Csv => {
            print_success(&format!("Report written to {}", path.display()));
            Ok(())
        }
    }
}
