//! Error types for the stress engine.

use thiserror::Error;

/// Result type for risk operations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during stress evaluation.
///
/// Engine-level errors are unrecoverable for that evaluation and surface
/// synchronously to the caller; there is no retry and no silent fallback.
#[derive(Error, Debug, Clone)]
pub enum RiskError {
    /// Annual OPEX must be strictly positive: it is the denominator of the
    /// reserve-coverage ratio.
    #[error("Annual OPEX must be positive, got {value}")]
    NonPositiveOpex {
        /// The offending OPEX value.
        value: String,
    },

    /// Invalid portfolio data reached the engine.
    #[error(transparent)]
    Portfolio(#[from] steward_portfolio::PortfolioError),

    /// A named scenario was not found in the preset registry.
    #[error("Unknown scenario: '{name}'")]
    ScenarioNotFound {
        /// The requested scenario name.
        name: String,
    },

    /// A risk-profile override file could not be parsed.
    #[error("Invalid risk-profile configuration: {reason}")]
    InvalidProfileConfig {
        /// Parser diagnostics.
        reason: String,
    },
}

impl RiskError {
    /// Create a non-positive OPEX error.
    #[must_use]
    pub fn non_positive_opex(value: impl ToString) -> Self {
        Self::NonPositiveOpex {
            value: value.to_string(),
        }
    }

    /// Create a scenario-not-found error.
    #[must_use]
    pub fn scenario_not_found(name: impl Into<String>) -> Self {
        Self::ScenarioNotFound { name: name.into() }
    }

    /// Create an invalid profile configuration error.
    #[must_use]
    pub fn invalid_profile_config(reason: impl Into<String>) -> Self {
        Self::InvalidProfileConfig {
            reason: reason.into(),
        }
    }
}
