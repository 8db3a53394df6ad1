//! Error types for fuel-log

use thiserror::Error;

/// Rejections raised by form validation.
///
/// The `Display` text of each variant is the message shown to the user;
/// checks run in declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter valid start and end dates.")]
    InvalidDates,

    #[error("End Date must be after Start Date.")]
    EndNotAfterStart,

    #[error("Max Tank Capacity must be a positive number.")]
    NonPositiveCapacity,

    #[error("Total Gallons to Purchase must be a positive number.")]
    NonPositiveTotal,

    #[error("Please enter at least one gas station.")]
    NoStations,

    #[error("Total gallons to purchase should generally be greater than or equal to max tank capacity.")]
    TotalBelowCapacity,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_distinct() {
        let all = [
            ValidationError::InvalidDates,
            ValidationError::EndNotAfterStart,
            ValidationError::NonPositiveCapacity,
            ValidationError::NonPositiveTotal,
            ValidationError::NoStations,
            ValidationError::TotalBelowCapacity,
        ];
        let mut messages: Vec<String> = all.iter().map(|e| e.to_string()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), all.len());
    }

    #[test]
    fn test_validation_error_passes_message_through() {
        let err: Error = ValidationError::NoStations.into();
        assert_eq!(err.to_string(), "Please enter at least one gas station.");
    }
}
