//! Error types for input validation and data loading

use thiserror::Error;

/// Result type for fallible stress-test operations
pub type Result<T> = std::result::Result<T, StressError>;

/// Rejected simulation input
///
/// Raised only by the validating constructors. The engine itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// A numeric field was NaN or infinite
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Baseline GDP must be positive
    #[error("baseline_gdp must be positive, got {0}")]
    NonPositiveGdp(f64),

    /// Baseline debt must be positive
    #[error("baseline_debt must be positive, got {0}")]
    NonPositiveDebt(f64),

    /// Policy must be active for at least one month
    #[error("duration_months must be at least 1")]
    ZeroDuration,

    /// Spending commitment cannot be negative
    #[error("spending_commitment must not be negative, got {0}")]
    NegativeSpending(f64),
}

/// Errors raised while loading parameters or running batches
#[derive(Error, Debug)]
pub enum StressError {
    /// Input failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A policy block record could not be interpreted
    #[error("Invalid record {record}: {message}")]
    InvalidRecord { record: usize, message: String },
}

impl StressError {
    /// Create an invalid record error
    pub fn invalid_record(record: usize, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            record,
            message: message.into(),
        }
    }
}
