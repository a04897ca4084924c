//! Symposium Source Layer
//!
//! Adapters over independent, read-only public text sources. Each adapter
//! turns a subject name into raw material and never lets a failure escape:
//! transport errors, bad status codes and empty matches are logged and
//! turned into empty sentinels.
//!
//! # Sources
//!
//! - `WikipediaClient`: biography intro extracts and name suggestions
//! - `WikiquoteClient`: quote-like lines from a subject's quote page
//! - `OpenLibraryClient`: work titles for a matching author record
//! - `GutendexClient`: a short excerpt from a public-domain text
//! - `MockSource`: deterministic, scriptable source for tests
//!
//! # Examples
//!
//! ```
//! use symposium_sources::{MockSource, SourceClient, SourceKind};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = MockSource::new(SourceKind::Quotation);
//! source.respond("Plato", vec!["Know thyself.".to_string()]);
//!
//! let quotes = source.fetch_for("Plato").await;
//! assert_eq!(quotes, vec!["Know thyself.".to_string()]);
//!
//! // Unknown subjects degrade to the empty sentinel
//! let none: Vec<String> = source.fetch_for("Nobody").await;
//! assert!(none.is_empty());
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod gutendex;
mod http;
mod mediawiki;
pub mod mock;
pub mod openlibrary;
pub mod text;
pub mod wikipedia;
pub mod wikiquote;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

pub use config::SourcesConfig;
pub use gutendex::GutendexClient;
pub use mediawiki::SearchHit;
pub use mock::MockSource;
pub use openlibrary::{AuthorRecord, OpenLibraryClient};
pub use wikipedia::{Suggestion, WikipediaClient};
pub use wikiquote::WikiquoteClient;

/// Errors that can occur while talking to a source
///
/// These never cross the [`SourceClient`] boundary; the trait's public
/// methods absorb them into empty results.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport, DNS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Source answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status {
        /// Status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Source reachable but had no usable match
    #[error("No usable match: {0}")]
    EmptyResult(String),

    /// Payload could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SourceError::InvalidResponse(e.to_string())
        } else {
            SourceError::Network(e.to_string())
        }
    }
}

/// The four kinds of external text source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Encyclopedia intro extracts
    Biography,
    /// Quote collections
    Quotation,
    /// Author and work catalog
    Bibliography,
    /// Public-domain full texts
    FullText,
}

impl SourceKind {
    /// Get the source kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Biography => "biography",
            SourceKind::Quotation => "quotation",
            SourceKind::Bibliography => "bibliography",
            SourceKind::FullText => "full-text",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform contract over one external text source
///
/// Implementors provide the fallible `try_search`/`try_fetch` pair; callers
/// use `search_subject`, `fetch_raw` and `fetch_for`, which never fail.
#[async_trait]
pub trait SourceClient: Send + Sync {
    /// Reference to a located remote page
    type Page: Send + Sync;

    /// Material the source yields; `Default` is the empty sentinel
    type Material: Default + Send;

    /// Which source this is
    fn kind(&self) -> SourceKind;

    /// Locate the best-matching page for a subject
    ///
    /// `Ok(None)` means the source was reachable but nothing matched.
    async fn try_search(&self, subject: &str) -> Result<Option<Self::Page>, SourceError>;

    /// Retrieve and refine the content of a located page
    async fn try_fetch(&self, page: &Self::Page) -> Result<Self::Material, SourceError>;

    /// Locate the best-matching page, or `None` on no match or failure
    async fn search_subject(&self, subject: &str) -> Option<Self::Page> {
        match self.try_search(subject).await {
            Ok(page) => page,
            Err(e) => {
                warn!(source = %self.kind(), subject, error = %e, "Source search failed");
                None
            }
        }
    }

    /// Retrieve content for a located page, or the empty sentinel on failure
    async fn fetch_raw(&self, page: &Self::Page) -> Self::Material {
        match self.try_fetch(page).await {
            Ok(material) => material,
            Err(e) => {
                warn!(source = %self.kind(), error = %e, "Source fetch failed");
                Self::Material::default()
            }
        }
    }

    /// Search then fetch in one step
    async fn fetch_for(&self, subject: &str) -> Self::Material {
        match self.search_subject(subject).await {
            Some(page) => self.fetch_raw(&page).await,
            None => {
                debug!(source = %self.kind(), subject, "No page found for subject");
                Self::Material::default()
            }
        }
    }
}

/// One adapter per source, sharing a single HTTP connection pool
#[derive(Debug, Clone)]
pub struct SourceSet {
    /// Biography source
    pub biography: WikipediaClient,
    /// Quotation source
    pub quotation: WikiquoteClient,
    /// Bibliography source
    pub bibliography: OpenLibraryClient,
    /// Full-text source
    pub full_text: GutendexClient,
}

impl SourceSet {
    /// Build all four adapters from one configuration
    pub fn from_config(config: &SourcesConfig) -> Result<Self, SourceError> {
        config.validate().map_err(SourceError::Config)?;
        let client = http::build_client(config)?;

        Ok(Self {
            biography: WikipediaClient::with_client(client.clone(), config),
            quotation: WikiquoteClient::with_client(client.clone(), config),
            bibliography: OpenLibraryClient::with_client(client.clone(), config),
            full_text: GutendexClient::with_client(client, config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_names() {
        assert_eq!(SourceKind::Biography.to_string(), "biography");
        assert_eq!(SourceKind::FullText.as_str(), "full-text");
    }

    #[test]
    fn test_source_set_from_default_config() {
        let set = SourceSet::from_config(&SourcesConfig::default());
        assert!(set.is_ok());
    }

    #[test]
    fn test_source_set_rejects_invalid_config() {
        let mut config = SourcesConfig::default();
        config.request_timeout_secs = 0;
        assert!(matches!(
            SourceSet::from_config(&config),
            Err(SourceError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_for_absorbs_failures() {
        let source: MockSource<Vec<String>> = MockSource::new(SourceKind::Quotation);
        source.fail("Plato", "connection reset");

        assert!(source.search_subject("Plato").await.is_some());
        assert!(source.fetch_for("Plato").await.is_empty());
        assert!(source.fetch_for("Unknown").await.is_empty());
    }
}
