//! Error types for the revenue_analytics crate
//!
//! The numeric engine itself never fails; these errors come from the
//! boundaries around it (series construction, providers, configuration).

use thiserror::Error;

/// Custom error types for the revenue_analytics crate
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to parameter validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error while loading configuration sources
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, AnalyticsError>;
