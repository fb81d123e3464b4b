//! Plain-text report rendering.
//!
//! Produces the byte stream the report interface is defined by. The text
//! layout mirrors the reference report: header, executive summary, the
//! scenario parameters, the per-holding table, the post-stress allocation,
//! and the insight list.

use crate::document::ReportDocument;
use rust_decimal::Decimal;
use steward_risk::InsightSeverity;

const RULE: &str =
    "================================================================================";
const LIGHT_RULE: &str =
    "--------------------------------------------------------------------------------";

/// Formats an SGD amount with thousands separators.
#[must_use]
pub fn format_sgd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let raw = rounded.abs().to_string();
    let (int_part, frac_part) = match raw.split_once('.') {
        // Pad so cents always show two digits.
        Some((i, f)) => (i.to_string(), format!(".{f:0<2}")),
        None => (raw, String::new()),
    };

    let mut grouped = String::new();
    for (count, ch) in int_part.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}S${grouped}{frac_part}")
}

/// Formats a fraction as a signed percentage.
#[must_use]
pub fn format_pct(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Renders a report document to text.
#[must_use]
pub fn render_text(document: &ReportDocument) -> String {
    let metrics = &document.metrics;
    let params = &document.scenario.params;
    let mut out = String::new();

    let mut line = |s: &str| {
        out.push_str(s);
        out.push('\n');
    };

    // Header
    line(RULE);
    line(&document.title);
    line(&format!(
        "Generated {} UTC",
        document.generated_at.format("%d %B %Y at %H:%M")
    ));
    line(&format!("Scenario: {}", document.scenario.name));
    if let Some(desc) = &document.scenario.description {
        line(desc);
    }
    line(RULE);
    line("");

    // Executive summary
    line("EXECUTIVE SUMMARY");
    line(LIGHT_RULE);
    line(&format!(
        "{:<34}{}",
        "Original portfolio value:",
        format_sgd(metrics.original_portfolio_value)
    ));
    line(&format!(
        "{:<34}{}",
        "Stressed portfolio value:",
        format_sgd(metrics.stressed_portfolio_value)
    ));
    line(&format!(
        "{:<34}{}",
        "Maximum drawdown:",
        format_pct(metrics.maximum_drawdown)
    ));
    line(&format!(
        "{:<34}{:.2}x ({:.1} months)",
        "Reserve coverage:", metrics.reserve_coverage_ratio, metrics.reserve_months_covered
    ));
    line(&format!(
        "{:<34}{:.1} days",
        "Time to liquidity:", metrics.time_to_liquidity_days
    ));
    line(&format!(
        "{:<34}{}",
        "Volatility breach:",
        if metrics.volatility_breach { "YES" } else { "no" }
    ));
    line(&format!(
        "{:<34}{}",
        "Liquidity breach:",
        if metrics.liquidity_breach { "YES" } else { "no" }
    ));
    line("");

    // Stress parameters
    line("STRESS PARAMETERS");
    line(LIGHT_RULE);
    line(&format!(
        "{:<34}{}",
        "Interest rate shock:",
        format_pct_decimal(params.interest_rate_shock)
    ));
    line(&format!(
        "{:<34}{}",
        "Inflation spike:",
        format_pct_decimal(params.inflation_spike)
    ));
    line(&format!(
        "{:<34}{}",
        "Multi-asset drawdown:",
        format_pct_decimal(params.multi_asset_drawdown)
    ));
    line(&format!(
        "{:<34}{} days",
        "Redemption freeze:", params.redemption_freeze_days
    ));
    line(&format!(
        "{:<34}{}",
        "Early withdrawal penalty:",
        format_pct_decimal(params.early_withdrawal_penalty)
    ));
    line(&format!(
        "{:<34}{}",
        "Counterparty risk shock:",
        format_pct_decimal(params.counterparty_risk_shock)
    ));
    line(&format!(
        "{:<34}{}",
        "Annual OPEX assumption:",
        format_sgd(document.config.annual_opex)
    ));
    line("");

    // Per-holding table
    line("HOLDINGS UNDER STRESS");
    line(LIGHT_RULE);
    line(&format!(
        "{:<28}{:<20}{:>15}{:>15}",
        "Holding", "Class", "Original", "Stressed"
    ));
    for holding in &metrics.per_holding {
        line(&format!(
            "{:<28}{:<20}{:>15}{:>15}",
            truncate(&holding.fund_name, 26),
            holding.asset_class.label(),
            format_sgd(holding.original_amount),
            format_sgd(holding.stressed_amount),
        ));
    }
    line("");

    // Allocation
    line("POST-STRESS ALLOCATION");
    line(LIGHT_RULE);
    if metrics.post_stress_allocation.is_empty() {
        line("Portfolio fully depleted under stress; allocation undefined.");
    } else {
        for (class, breakdown) in &metrics.post_stress_allocation {
            line(&format!(
                "{:<28}{:>15}  {:>7}",
                class.label(),
                format_sgd(breakdown.amount),
                format_pct(breakdown.fraction),
            ));
        }
    }
    line("");

    // Insights
    line("KEY INSIGHTS");
    line(LIGHT_RULE);
    if document.insights.is_empty() {
        line("No notable observations.");
    } else {
        for insight in &document.insights {
            line(&format!(
                "[{}] {}",
                severity_tag(insight.severity),
                insight.message
            ));
        }
    }
    line("");
    line(RULE);

    out
}

/// Renders a report document to the byte stream the report interface
/// promises.
#[must_use]
pub fn render_bytes(document: &ReportDocument) -> Vec<u8> {
    render_text(document).into_bytes()
}

fn format_pct_decimal(fraction: Decimal) -> String {
    format!("{:.2}%", fraction * Decimal::ONE_HUNDRED)
}

fn severity_tag(severity: InsightSeverity) -> &'static str {
    match severity {
        InsightSeverity::Positive => "OK",
        InsightSeverity::Notice => "NOTE",
        InsightSeverity::Warning => "WARN",
        InsightSeverity::Critical => "CRIT",
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
