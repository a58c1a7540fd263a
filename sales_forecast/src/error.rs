//! Error types for the sales_forecast crate

use thiserror::Error;

/// Custom error types for the sales_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to input validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error reported by a sales data store
    #[error("Repository error for item {item_id}: {message}")]
    RepositoryError { item_id: String, message: String },

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from serializing results
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Error from loading configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from parsing numeric input
    #[error("Parse error: {0}")]
    ParseError(#[from] std::num::ParseIntError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::CsvError(err.to_string())
    }
}

impl From<config::ConfigError> for ForecastError {
    fn from(err: config::ConfigError) -> Self {
        ForecastError::ConfigError(err.to_string())
    }
}

impl ForecastError {
    /// Build a repository error for the given item
    pub fn repository(item_id: impl Into<String>, message: impl Into<String>) -> Self {
        ForecastError::RepositoryError {
            item_id: item_id.into(),
            message: message.into(),
        }
    }
}
