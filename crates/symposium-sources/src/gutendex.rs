//! Full-text source backed by the Gutendex catalog of Project Gutenberg

use crate::http::{get_json, get_text};
use crate::text::{author_matches, ExcerptWindow};
use crate::{SourceClient, SourceError, SourceKind, SourcesConfig};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use symposium_domain::{surname, Excerpt};
use tracing::{debug, warn};

/// Plain-text formats in order of preference
const TEXT_FORMATS: [&str; 3] = [
    "text/plain; charset=utf-8",
    "text/plain",
    "text/plain; charset=us-ascii",
];

/// A catalog entry with at least one confirmed author match
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogBook {
    /// Book title
    pub title: String,

    /// Authors as listed by the catalog
    #[serde(default)]
    pub authors: Vec<CatalogAuthor>,

    /// Download URLs keyed by MIME type
    #[serde(default)]
    pub formats: HashMap<String, String>,
}

impl CatalogBook {
    /// Preferred plain-text download URL
    pub fn text_url(&self) -> Option<&str> {
        TEXT_FORMATS
            .iter()
            .find_map(|format| self.formats.get(*format))
            .map(String::as_str)
    }
}

/// One listed author
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogAuthor {
    /// Author name, usually "Last, First"
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    results: Vec<CatalogBook>,
}

/// Full-text source
#[derive(Debug, Clone)]
pub struct GutendexClient {
    client: reqwest::Client,
    base_url: String,
    max_candidates: usize,
    window: ExcerptWindow,
}

impl GutendexClient {
    /// Create a client with its own connection pool
    pub fn new(config: &SourcesConfig) -> Result<Self, SourceError> {
        Ok(Self::with_client(crate::http::build_client(config)?, config))
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(client: reqwest::Client, config: &SourcesConfig) -> Self {
        Self {
            client,
            base_url: config.gutendex_url.trim_end_matches('/').to_string(),
            max_candidates: config.max_candidate_works,
            window: config.excerpt_window(),
        }
    }

    async fn excerpt_from(&self, book: &CatalogBook) -> Result<Option<Excerpt>, SourceError> {
        let Some(url) = book.text_url() else {
            return Ok(None);
        };
        let body = get_text(&self.client, url).await?;

        Ok(self.window.extract_excerpt(&body).map(|text| Excerpt {
            work_title: book.title.clone(),
            text,
        }))
    }
}

#[async_trait]
impl SourceClient for GutendexClient {
    type Page = Vec<CatalogBook>;
    type Material = Option<Excerpt>;

    fn kind(&self) -> SourceKind {
        SourceKind::FullText
    }

    /// Books by the subject, at most `max_candidate_works`, catalog order
    async fn try_search(&self, subject: &str) -> Result<Option<Vec<CatalogBook>>, SourceError> {
        let last = surname(subject);
        if last.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/books", self.base_url);
        let response: CatalogResponse =
            get_json(&self.client, &url, &[("search", last.to_string())]).await?;

        let books: Vec<CatalogBook> = response
            .results
            .into_iter()
            .filter(|book| book.authors.iter().any(|a| author_matches(&a.name, subject)))
            .take(self.max_candidates)
            .collect();

        Ok(if books.is_empty() { None } else { Some(books) })
    }

    /// First candidate yielding a non-empty excerpt wins
    async fn try_fetch(&self, books: &Self::Page) -> Result<Option<Excerpt>, SourceError> {
        for book in books {
            match self.excerpt_from(book).await {
                Ok(Some(excerpt)) => {
                    debug!(title = %book.title, "Excerpt found");
                    return Ok(Some(excerpt));
                }
                Ok(None) => debug!(title = %book.title, "No usable excerpt"),
                Err(e) => warn!(title = %book.title, error = %e, "Text download failed"),
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(formats: &[(&str, &str)]) -> CatalogBook {
        CatalogBook {
            title: "Walden".to_string(),
            authors: vec![CatalogAuthor {
                name: "Thoreau, Henry David".to_string(),
            }],
            formats: formats
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_text_url_preference() {
        let b = book(&[
            ("text/plain; charset=us-ascii", "ascii"),
            ("text/plain", "plain"),
            ("text/html", "html"),
        ]);
        assert_eq!(b.text_url(), Some("plain"));
    }

    #[test]
    fn test_text_url_missing() {
        assert_eq!(book(&[("application/epub+zip", "epub")]).text_url(), None);
    }
}
