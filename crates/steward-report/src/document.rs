//! Report document model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use steward_risk::{EngineConfig, Insight, StressMetrics, StressScenario};

/// A stress-test report, ready for rendering.
///
/// The document is a plain value assembled from one scenario's inputs and
/// outputs; rendering back ends consume it without recomputing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Report title.
    pub title: String,

    /// Organization prefix used in the filename convention.
    pub org_prefix: String,

    /// When the report was generated.
    pub generated_at: DateTime<Utc>,

    /// The scenario that was evaluated.
    pub scenario: StressScenario,

    /// The configuration the evaluation ran under.
    pub config: EngineConfig,

    /// The metrics the engine produced.
    pub metrics: StressMetrics,

    /// Summary insights derived from the metrics.
    pub insights: Vec<Insight>,
}

impl ReportDocument {
    /// Creates a report builder.
    #[must_use]
    pub fn builder() -> ReportBuilder {
        ReportBuilder::default()
    }

    /// Returns the standardized filename for this report.
    ///
    /// Convention: `{OrgPrefix}_StressTest_{YYYY-MM-DD}_{HH-MM}.{ext}`.
    #[must_use]
    pub fn filename(&self, extension: &str) -> String {
        format!(
            "{}_StressTest_{}.{extension}",
            self.org_prefix,
            self.generated_at.format("%Y-%m-%d_%H-%M"),
        )
    }
}

/// Builder for [`ReportDocument`].
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    title: Option<String>,
    org_prefix: Option<String>,
    generated_at: Option<DateTime<Utc>>,
    scenario: Option<StressScenario>,
    config: Option<EngineConfig>,
    metrics: Option<StressMetrics>,
    insights: Vec<Insight>,
}

impl ReportBuilder {
    /// Sets the report title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the organization prefix for the filename.
    #[must_use]
    pub fn org_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.org_prefix = Some(prefix.into());
        self
    }

    /// Sets the generation timestamp.
    #[must_use]
    pub fn generated_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.generated_at = Some(timestamp);
        self
    }

    /// Sets the scenario.
    #[must_use]
    pub fn scenario(mut self, scenario: StressScenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Sets the engine configuration.
    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the metrics.
    #[must_use]
    pub fn metrics(mut self, metrics: StressMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Sets the insights.
    #[must_use]
    pub fn insights(mut self, insights: Vec<Insight>) -> Self {
        self.insights = insights;
        self
    }

    /// Builds the document.
    ///
    /// Missing title/prefix fall back to the deployment defaults; the
    /// scenario, config, and metrics are required, and `None` comes back
    /// when any of them is absent.
    #[must_use]
    pub fn build(self) -> Option<ReportDocument> {
        Some(ReportDocument {
            title: self
                .title
                .unwrap_or_else(|| "Investment Portfolio - Stress Test Analysis".to_string()),
            org_prefix: self.org_prefix.unwrap_or_else(|| "CPC".to_string()),
            generated_at: self.generated_at.unwrap_or_else(Utc::now),
            scenario: self.scenario?,
            config: self.config?,
            metrics: self.metrics?,
            insights: self.insights,
        })
    }
}
