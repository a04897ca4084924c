//! Core FactExtractor implementation

use crate::config::ExtractorConfig;
use crate::description::{century_era, describe};
use crate::error::ExtractorError;
use crate::rules::{run_cascade, RuleInput};
use symposium_domain::PersonFacts;
use symposium_sources::SourceClient;
use tracing::debug;

/// Turns biography prose into structured [`PersonFacts`]
#[derive(Debug, Clone, Default)]
pub struct FactExtractor {
    config: ExtractorConfig,
}

impl FactExtractor {
    /// Create an extractor after validating its configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract lifespan, era and description from raw biography text
    ///
    /// Never fails. Text that no date rule explains yields
    /// [`Confidence::Unknown`](symposium_domain::Confidence::Unknown) with
    /// both years absent.
    pub fn extract(&self, text: &str, subject: &str) -> PersonFacts {
        let intro = match text.char_indices().nth(self.config.intro_window_chars) {
            Some((idx, _)) => &text[..idx],
            None => text,
        };
        let input = RuleInput {
            intro,
            full: text,
            config: &self.config,
            current_year: self.config.current_year(),
        };

        let mut facts = PersonFacts::unknown();
        let mut era = None;

        match run_cascade(&input) {
            Some((rule, found)) => {
                debug!(subject, rule, birth = ?found.birth_year, death = ?found.death_year, "Date rule matched");
                facts.birth_year = found.birth_year;
                facts.death_year = found.death_year;
                facts.deceased = found.deceased;
                facts.confidence = found.confidence;
                era = found.era.filter(|e| !e.is_empty());
            }
            None => debug!(subject, "No date rule matched"),
        }

        facts.era = era.or_else(|| century_era(text)).unwrap_or_default();
        facts.description = describe(text, subject, &self.config);
        facts
    }

    /// Look a subject up in a biography source and extract facts
    ///
    /// Returns `None` when the source has no page or an empty extract.
    pub async fn lookup<S>(&self, source: &S, subject: &str) -> Option<PersonFacts>
    where
        S: SourceClient<Material = Option<String>>,
    {
        let text = source.fetch_for(subject).await?;
        if text.trim().is_empty() {
            debug!(subject, "Empty biography extract");
            return None;
        }
        Some(self.extract(&text, subject))
    }
}
