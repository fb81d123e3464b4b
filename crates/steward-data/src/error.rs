//! Error types for file-based data sources.

use thiserror::Error;

/// Result type for data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading or saving data files.
#[derive(Error, Debug)]
pub enum DataError {
    /// Filesystem access failed.
    #[error("I/O error on '{path}': {reason}")]
    Io {
        /// The path involved.
        path: String,
        /// The underlying diagnostics.
        reason: String,
    },

    /// A CSV file could not be read as a whole.
    #[error("CSV error in '{path}': {reason}")]
    Csv {
        /// The path involved.
        path: String,
        /// Parser diagnostics.
        reason: String,
    },

    /// One CSV row was malformed.
    #[error("Invalid row {line} in '{path}': {reason}")]
    Row {
        /// The path involved.
        path: String,
        /// 1-based data row number.
        line: usize,
        /// What was wrong with the row.
        reason: String,
    },

    /// A cached snapshot could not be serialized or deserialized.
    #[error("Cache serialization error: {reason}")]
    Serialization {
        /// The underlying diagnostics.
        reason: String,
    },

    /// Loaded rows failed portfolio validation.
    #[error(transparent)]
    Portfolio(#[from] steward_portfolio::PortfolioError),

    /// A market data provider could not supply a snapshot.
    #[error("Market data unavailable: {reason}")]
    ProviderUnavailable {
        /// Why the provider failed.
        reason: String,
    },
}

impl DataError {
    /// Create an I/O error for a path.
    #[must_use]
    pub fn io(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Io {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a CSV error for a path.
    #[must_use]
    pub fn csv(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Csv {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a row-level error.
    #[must_use]
    pub fn row(path: impl Into<String>, line: usize, reason: impl ToString) -> Self {
        Self::Row {
            path: path.into(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Create a provider-unavailable error.
    #[must_use]
    pub fn provider_unavailable(reason: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            reason: reason.into(),
        }
    }
}
