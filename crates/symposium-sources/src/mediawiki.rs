//! MediaWiki action API shared by the biography and quotation sources

use crate::http::get_json;
use crate::SourceError;
use serde::Deserialize;
use std::collections::HashMap;

/// One full-text search hit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    /// Page title
    pub title: String,

    /// Highlighted snippet, still carrying HTML
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: HashMap<String, ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    #[serde(default)]
    extract: Option<String>,
}

/// Thin client over one wiki's `api.php`
#[derive(Debug, Clone)]
pub(crate) struct MediaWikiApi {
    client: reqwest::Client,
    api_url: String,
}

impl MediaWikiApi {
    pub(crate) fn new(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    /// Full-text search, best match first
    pub(crate) async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, SourceError> {
        let params = [
            ("action", "query".to_string()),
            ("list", "search".to_string()),
            ("srsearch", query.to_string()),
            ("srlimit", limit.to_string()),
            ("srprop", "snippet".to_string()),
            ("format", "json".to_string()),
        ];
        let response: SearchResponse = get_json(&self.client, &self.api_url, &params).await?;
        Ok(response.query.map(|q| q.search).unwrap_or_default())
    }

    /// Plain-text extract of one page, intro section only when `intro_only`
    ///
    /// `Ok(None)` when the page is missing or its extract is blank.
    pub(crate) async fn extract(
        &self,
        title: &str,
        intro_only: bool,
    ) -> Result<Option<String>, SourceError> {
        let mut params = vec![
            ("action", "query".to_string()),
            ("prop", "extracts".to_string()),
            ("titles", title.to_string()),
            ("explaintext", "1".to_string()),
            ("redirects", "1".to_string()),
            ("format", "json".to_string()),
        ];
        // The API treats any value as true, so the flag is omitted for full pages
        if intro_only {
            params.push(("exintro", "1".to_string()));
        }

        let response: ExtractResponse = get_json(&self.client, &self.api_url, &params).await?;
        let extract = response
            .query
            .into_iter()
            .flat_map(|q| q.pages.into_values())
            .find_map(|page| page.extract)
            .filter(|text| !text.trim().is_empty());
        Ok(extract)
    }
}
