//! Error types for the FactExtractor

use thiserror::Error;

/// Errors that can occur while setting up extraction
///
/// Extraction itself cannot fail: text that matches no heuristic yields
/// facts with unknown confidence.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
