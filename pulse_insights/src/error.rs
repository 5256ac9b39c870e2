//! Error types for the pulse_insights crate

use thiserror::Error;

/// Custom error types for the pulse_insights crate
#[derive(Debug, Error)]
pub enum InsightError {
    /// Error related to record validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error in a configuration value
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from JSON encoding or decoding
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error from reading CSV records
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from parsing a TOML config file
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Error from trend calculations
    #[error("Math error: {0}")]
    MathError(#[from] trend_math::MathError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, InsightError>;
