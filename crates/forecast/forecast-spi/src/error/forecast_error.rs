//! Forecast error types

use thiserror::Error;

/// Errors that can occur during forecasting operations.
///
/// Missing-data conditions are never errors; they surface as absent values.
/// This enum covers caller-contract violations only.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl ForecastError {
    /// Shorthand for an `InvalidParameter` error.
    pub fn invalid_parameter(name: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ForecastError>;
