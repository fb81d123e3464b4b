//! Application configuration.
//!
//! Compiled-in defaults with optional TOML overrides. Everything the
//! legacy deployment kept as module constants lives here and flows into
//! the engine as an explicit [`EngineConfig`].

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};
use steward_risk::{EngineConfig, RiskProfileTable};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Portfolio CSV path.
    pub portfolio_file: String,

    /// Market data cache directory.
    pub cache_dir: String,

    /// Annual operating expenditure in SGD.
    pub annual_opex: Decimal,

    /// Months of reserves the coverage ratio is read against.
    pub reserve_months_required: u32,

    /// Report title.
    pub report_title: String,

    /// Organization prefix for report filenames.
    pub report_prefix: String,

    /// Optional risk-profile override file (TOML).
    pub profiles_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            portfolio_file: "portfolio.csv".to_string(),
            cache_dir: "data/market_cache".to_string(),
            annual_opex: Decimal::from(2_400_000),
            reserve_months_required: 12,
            report_title: "Investment Portfolio - Stress Test Analysis".to_string(),
            report_prefix: "CPC".to_string(),
            profiles_file: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration: defaults, overridden by the file when given.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| CliError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Builds the engine configuration this deployment evaluates under.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::with_annual_opex(self.annual_opex).reserve_months(self.reserve_months_required)
    }

    /// Loads the risk-profile table, applying the override file when set.
    ///
    /// # Errors
    ///
    /// Returns an error when the override file cannot be read or parsed.
    pub fn profile_table(&self) -> CliResult<RiskProfileTable> {
        match &self.profiles_file {
            None => Ok(RiskProfileTable::standard().clone()),
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .map_err(|e| CliError::Config(format!("cannot read {path}: {e}")))?;
                RiskProfileTable::from_toml_str(&raw).map_err(CliError::from)
            }
        }
    }
}
