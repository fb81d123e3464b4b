//! Error types for the portfolio data model.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur while constructing or validating portfolio data.
#[derive(Error, Debug, Clone)]
pub enum PortfolioError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A holding carries a negative amount.
    #[error("Invalid holding '{fund_name}': negative amount {amount}")]
    NegativeAmount {
        /// The holding's fund name.
        fund_name: String,
        /// The offending amount.
        amount: String,
    },

    /// An asset-class code did not match any known class.
    #[error("Unknown asset class code: '{code}'")]
    UnknownAssetClass {
        /// The unrecognized code.
        code: String,
    },

    /// Invalid holding data.
    #[error("Invalid holding '{fund_name}': {reason}")]
    InvalidHolding {
        /// The holding's fund name.
        fund_name: String,
        /// The reason the holding is invalid.
        reason: String,
    },
}

impl PortfolioError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an unknown asset class error.
    #[must_use]
    pub fn unknown_asset_class(code: impl Into<String>) -> Self {
        Self::UnknownAssetClass { code: code.into() }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(fund_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            fund_name: fund_name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::missing_field("name");
        assert!(err.to_string().contains("name"));

        let err = PortfolioError::unknown_asset_class("Crypto");
        assert!(err.to_string().contains("Crypto"));

        let err = PortfolioError::invalid_holding("Fullerton SGD Fund", "bad row");
        assert!(err.to_string().contains("Fullerton SGD Fund"));
        assert!(err.to_string().contains("bad row"));
    }
}
