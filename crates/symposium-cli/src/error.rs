//! Error types for the CLI application.

use symposium_aggregator::AggregatorError;
use symposium_extractor::ExtractorError;
use symposium_sources::SourceError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Source setup error
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

impl From<ExtractorError> for CliError {
    fn from(e: ExtractorError) -> Self {
        match e {
            ExtractorError::Config(msg) => CliError::Config(format!("[extractor] {}", msg)),
        }
    }
}

impl From<AggregatorError> for CliError {
    fn from(e: AggregatorError) -> Self {
        match e {
            AggregatorError::Config(msg) => CliError::Config(format!("[aggregator] {}", msg)),
        }
    }
}
