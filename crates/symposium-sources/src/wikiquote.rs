//! Quotation source backed by Wikiquote page extracts

use crate::mediawiki::MediaWikiApi;
use crate::text::QuoteFilter;
use crate::{SourceClient, SourceError, SourceKind, SourcesConfig};
use async_trait::async_trait;
use symposium_domain::Quote;
use tracing::debug;

/// Quotation source
#[derive(Debug, Clone)]
pub struct WikiquoteClient {
    api: MediaWikiApi,
    filter: QuoteFilter,
}

impl WikiquoteClient {
    /// Create a client with its own connection pool
    pub fn new(config: &SourcesConfig) -> Result<Self, SourceError> {
        Ok(Self::with_client(crate::http::build_client(config)?, config))
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(client: reqwest::Client, config: &SourcesConfig) -> Self {
        Self {
            api: MediaWikiApi::new(client, config.wikiquote_api_url.clone()),
            filter: config.quote_filter(),
        }
    }
}

#[async_trait]
impl SourceClient for WikiquoteClient {
    type Page = String;
    type Material = Vec<Quote>;

    fn kind(&self) -> SourceKind {
        SourceKind::Quotation
    }

    async fn try_search(&self, subject: &str) -> Result<Option<String>, SourceError> {
        let hits = self.api.search(subject, 1).await?;
        Ok(hits.into_iter().next().map(|hit| hit.title))
    }

    async fn try_fetch(&self, title: &Self::Page) -> Result<Vec<Quote>, SourceError> {
        let Some(extract) = self.api.extract(title, false).await? else {
            return Err(SourceError::EmptyResult(format!("no extract for '{}'", title)));
        };

        let quotes = self.filter.parse_quotes(&extract);
        debug!(page = %title, count = quotes.len(), "Quotes mined");
        Ok(quotes)
    }
}
