//! Bibliography source backed by the Open Library author and works API

use crate::http::get_json;
use crate::text::author_matches;
use crate::{SourceClient, SourceError, SourceKind, SourcesConfig};
use async_trait::async_trait;
use serde::Deserialize;
use symposium_domain::Work;
use tracing::debug;

/// A resolved author record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    /// Bare author key, e.g. `OL22098A`
    pub key: String,

    /// Author name as the catalog spells it
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct AuthorSearchResponse {
    #[serde(default)]
    docs: Vec<AuthorDoc>,
}

#[derive(Debug, Deserialize)]
struct AuthorDoc {
    key: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WorksResponse {
    #[serde(default)]
    entries: Vec<WorkEntry>,
}

#[derive(Debug, Deserialize)]
struct WorkEntry {
    title: Option<String>,
}

/// Bibliography source
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
    author_search_limit: usize,
    works_fetch_limit: usize,
    max_works: usize,
}

impl OpenLibraryClient {
    /// Create a client with its own connection pool
    pub fn new(config: &SourcesConfig) -> Result<Self, SourceError> {
        Ok(Self::with_client(crate::http::build_client(config)?, config))
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(client: reqwest::Client, config: &SourcesConfig) -> Self {
        Self {
            client,
            base_url: config.openlibrary_url.trim_end_matches('/').to_string(),
            author_search_limit: config.author_search_limit,
            works_fetch_limit: config.works_fetch_limit,
            max_works: config.max_works,
        }
    }
}

#[async_trait]
impl SourceClient for OpenLibraryClient {
    type Page = AuthorRecord;
    type Material = Vec<Work>;

    fn kind(&self) -> SourceKind {
        SourceKind::Bibliography
    }

    /// First author record whose name contains the subject's surname
    async fn try_search(&self, subject: &str) -> Result<Option<AuthorRecord>, SourceError> {
        let url = format!("{}/search/authors.json", self.base_url);
        let params = [
            ("q", subject.to_string()),
            ("limit", self.author_search_limit.to_string()),
        ];
        let response: AuthorSearchResponse = get_json(&self.client, &url, &params).await?;

        let record = response.docs.into_iter().find_map(|doc| {
            let (key, name) = (doc.key?, doc.name?);
            if !author_matches(&name, subject) {
                debug!(subject, author = %name, "Skipping author with different surname");
                return None;
            }
            Some(AuthorRecord {
                key: key.trim_start_matches("/authors/").to_string(),
                name,
            })
        });
        Ok(record)
    }

    async fn try_fetch(&self, author: &Self::Page) -> Result<Vec<Work>, SourceError> {
        let url = format!("{}/authors/{}/works.json", self.base_url, author.key);
        let params = [("limit", self.works_fetch_limit.to_string())];
        let response: WorksResponse = get_json(&self.client, &url, &params).await?;

        let works: Vec<Work> = response
            .entries
            .into_iter()
            .take(self.works_fetch_limit)
            .filter_map(|entry| entry.title)
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .take(self.max_works)
            .map(Work::new)
            .collect();

        debug!(author = %author.name, count = works.len(), "Works listed");
        Ok(works)
    }
}
