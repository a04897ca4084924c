//! Biography source backed by Wikipedia intro extracts

use crate::mediawiki::MediaWikiApi;
use crate::text::{decode_entities, strip_html, truncate_chars};
use crate::{SourceClient, SourceError, SourceKind, SourcesConfig};
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Title shapes that name events, lists, works or institutions rather than people
static NON_PERSON_TITLES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^(Murder|Death|Assassination|Killing|Execution) of ",
        r"(?i)^(List|Timeline|History|Bibliography|Discography|Filmography) of ",
        r"(?i)\((album|film|movie|song|book|novel|TV series|band|company|organization)\)$",
        r"(?i)\(disambiguation\)$",
        r"(?i)^The .+ (album|film|movie|song|book|novel|TV series)$",
        r"(?i) (album|film|movie|song|discography|filmography|bibliography)$",
        r"(?i)^(Battle|Siege|War|Treaty|Act) of ",
        r"(?i) (massacre|riot|revolution|rebellion|uprising|incident|scandal|controversy|conspiracy|trial|case)$",
        r"(?i)^(University|College|School|Institute|Museum|Library|Hospital|Church|Cathedral) of ",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Snippets are cut to this many characters
const SNIPPET_MAX_CHARS: usize = 100;

/// Queries shorter than this get no suggestions
const SUGGEST_MIN_QUERY_CHARS: usize = 2;

/// An autocomplete candidate for a partial name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Page title, usable as a subject
    pub title: String,

    /// Plain-text snippet
    pub snippet: String,
}

/// True unless the title looks like a non-person page
pub fn is_likely_person(title: &str) -> bool {
    !NON_PERSON_TITLES.iter().any(|re| re.is_match(title))
}

/// Biography source
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    api: MediaWikiApi,
    suggestion_limit: usize,
    suggestion_fetch_limit: usize,
}

impl WikipediaClient {
    /// Create a client with its own connection pool
    pub fn new(config: &SourcesConfig) -> Result<Self, SourceError> {
        Ok(Self::with_client(crate::http::build_client(config)?, config))
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(client: reqwest::Client, config: &SourcesConfig) -> Self {
        Self {
            api: MediaWikiApi::new(client, config.wikipedia_api_url.clone()),
            suggestion_limit: config.suggestion_limit,
            suggestion_fetch_limit: config.suggestion_fetch_limit,
        }
    }

    /// Person-like page titles for a partial name
    ///
    /// Returns an empty list for very short queries or on any failure.
    pub async fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let query = query.trim();
        if query.chars().count() < SUGGEST_MIN_QUERY_CHARS {
            return Vec::new();
        }

        let hits = match self.api.search(query, self.suggestion_fetch_limit).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(query, error = %e, "Suggestion search failed");
                return Vec::new();
            }
        };

        let suggestions: Vec<Suggestion> = hits
            .into_iter()
            .filter(|hit| is_likely_person(&hit.title))
            .take(self.suggestion_limit)
            .map(|hit| {
                let snippet = decode_entities(&strip_html(&hit.snippet));
                Suggestion {
                    title: hit.title,
                    snippet: truncate_chars(&snippet, SNIPPET_MAX_CHARS).to_string(),
                }
            })
            .collect();

        debug!(query, count = suggestions.len(), "Suggestions found");
        suggestions
    }
}

#[async_trait]
impl SourceClient for WikipediaClient {
    type Page = String;
    type Material = Option<String>;

    fn kind(&self) -> SourceKind {
        SourceKind::Biography
    }

    async fn try_search(&self, subject: &str) -> Result<Option<String>, SourceError> {
        let hits = self.api.search(subject, 1).await?;
        Ok(hits.into_iter().next().map(|hit| hit.title))
    }

    async fn try_fetch(&self, title: &Self::Page) -> Result<Option<String>, SourceError> {
        let extract = self.api.extract(title, true).await?;
        Ok(extract.map(|text| strip_html(&text).trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_titles_pass() {
        assert!(is_likely_person("Abraham Lincoln"));
        assert!(is_likely_person("Plato"));
        assert!(is_likely_person("John Smith (explorer)"));
    }

    #[test]
    fn test_non_person_titles_rejected() {
        for title in [
            "Assassination of Abraham Lincoln",
            "List of presidents of the United States",
            "Thriller (album)",
            "Mercury (disambiguation)",
            "Battle of Gettysburg",
            "Boston massacre",
            "University of Oxford",
            "Lincoln filmography",
        ] {
            assert!(!is_likely_person(title), "{title} should be rejected");
        }
    }
}
