//! Error types for the MaterialAggregator

use thiserror::Error;

/// Errors that can occur while setting up aggregation
///
/// Aggregation itself never fails; a subject with no material gets an
/// empty bundle.
#[derive(Error, Debug)]
pub enum AggregatorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
