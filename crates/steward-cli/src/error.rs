//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A shock flag was not a usable fraction.
    #[error("Invalid fraction: {0}. Use decimals like -0.015 for -1.5%.")]
    InvalidFraction(f64),

    /// Configuration file problems.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data layer error.
    #[error(transparent)]
    Data(#[from] steward_data::DataError),

    /// Engine error.
    #[error(transparent)]
    Risk(#[from] steward_risk::RiskError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
