//! Error types for experiment dispatch and calculation.

use thiserror::Error;

/// Result type alias using [`ChemError`].
pub type Result<T> = std::result::Result<T, ChemError>;

/// Error type for experiment requests.
#[derive(Debug, Error)]
pub enum ChemError {
    /// The experiment tag does not name a known calculator.
    #[error("unknown experiment: {0}")]
    UnknownExperiment(String),

    /// A required parameter is missing or not of the expected type.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// The inputs fall outside the domain of the formula.
    #[error("domain error: {0}")]
    Domain(String),
}

impl ChemError {
    /// Create a domain error with the given message.
    #[must_use]
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }
}
