//! Error types
//!
//! Expected absences (no report, no coverage, unknown path) are resolution
//! outcomes, not errors. `ApiError` covers invalid input, configuration and
//! collaborator failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Report provider error: {0}")]
    ReportProvider(String),

    #[error("Path existence check failed: {0}")]
    PathOracle(String),

    #[error("Critical files provider error: {0}")]
    CriticalFiles(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
