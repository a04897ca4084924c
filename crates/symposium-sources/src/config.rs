//! Configuration for the source adapters

use crate::text::{ExcerptWindow, QuoteFilter};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoints, timeouts and the heuristic bounds applied to source payloads
///
/// The numeric bounds are tuning constants carried over unchanged; they are
/// configurable rather than derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// MediaWiki API endpoint for biographies
    pub wikipedia_api_url: String,

    /// MediaWiki API endpoint for quotes
    pub wikiquote_api_url: String,

    /// Base URL of the author and work catalog
    pub openlibrary_url: String,

    /// Base URL of the public-domain text catalog
    pub gutendex_url: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Per-call timeout (seconds)
    pub request_timeout_secs: u64,

    /// Quote lines must be longer than this (characters)
    pub quote_min_chars: usize,

    /// Quote lines must be shorter than this (characters)
    pub quote_max_chars: usize,

    /// Maximum quotes kept per subject
    pub max_quotes: usize,

    /// Works requested from the catalog per author
    pub works_fetch_limit: usize,

    /// Maximum work titles kept per subject
    pub max_works: usize,

    /// Author records inspected for a surname match
    pub author_search_limit: usize,

    /// Candidate books tried for an excerpt
    pub max_candidate_works: usize,

    /// Characters read after the front matter
    pub excerpt_window_chars: usize,

    /// Excerpt paragraphs must be longer than this (characters)
    pub paragraph_min_chars: usize,

    /// Excerpt paragraphs must be shorter than this (characters)
    pub paragraph_max_chars: usize,

    /// Maximum paragraphs joined into one excerpt
    pub max_excerpt_paragraphs: usize,

    /// Suggestions returned for a partial name
    pub suggestion_limit: usize,

    /// Search hits fetched before filtering suggestions
    pub suggestion_fetch_limit: usize,
}

impl SourcesConfig {
    /// Get the per-call timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Quote filter bounds
    pub fn quote_filter(&self) -> QuoteFilter {
        QuoteFilter {
            min_chars: self.quote_min_chars,
            max_chars: self.quote_max_chars,
            limit: self.max_quotes,
        }
    }

    /// Excerpt window bounds
    pub fn excerpt_window(&self) -> ExcerptWindow {
        ExcerptWindow {
            window_chars: self.excerpt_window_chars,
            paragraph_min_chars: self.paragraph_min_chars,
            paragraph_max_chars: self.paragraph_max_chars,
            max_paragraphs: self.max_excerpt_paragraphs,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, url) in [
            ("wikipedia_api_url", &self.wikipedia_api_url),
            ("wikiquote_api_url", &self.wikiquote_api_url),
            ("openlibrary_url", &self.openlibrary_url),
            ("gutendex_url", &self.gutendex_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("{} must be an http(s) URL, got '{}'", name, url));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.quote_min_chars >= self.quote_max_chars {
            return Err("quote_min_chars must be less than quote_max_chars".to_string());
        }
        if self.paragraph_min_chars >= self.paragraph_max_chars {
            return Err("paragraph_min_chars must be less than paragraph_max_chars".to_string());
        }
        if self.excerpt_window_chars == 0 {
            return Err("excerpt_window_chars must be greater than 0".to_string());
        }
        if self.suggestion_limit > self.suggestion_fetch_limit {
            return Err("suggestion_limit cannot exceed suggestion_fetch_limit".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            wikipedia_api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            wikiquote_api_url: "https://en.wikiquote.org/w/api.php".to_string(),
            openlibrary_url: "https://openlibrary.org".to_string(),
            gutendex_url: "https://gutendex.com".to_string(),
            user_agent: concat!("symposium/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: 8,
            quote_min_chars: 30,
            quote_max_chars: 500,
            max_quotes: 5,
            works_fetch_limit: 10,
            max_works: 5,
            author_search_limit: 5,
            max_candidate_works: 3,
            excerpt_window_chars: 3000,
            paragraph_min_chars: 50,
            paragraph_max_chars: 500,
            max_excerpt_paragraphs: 3,
            suggestion_limit: 8,
            suggestion_fetch_limit: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SourcesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let mut config = SourcesConfig::default();
        config.gutendex_url = "gutendex.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_quote_bounds() {
        let mut config = SourcesConfig::default();
        config.quote_min_chars = 600;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SourcesConfig::from_toml("request_timeout_secs = 5\nmax_quotes = 3\n").unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.max_quotes, 3);
        assert_eq!(config.excerpt_window_chars, 3000);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SourcesConfig::default();
        let parsed = SourcesConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
