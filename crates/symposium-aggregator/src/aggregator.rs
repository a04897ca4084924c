//! Core MaterialAggregator implementation

use crate::config::AggregatorConfig;
use crate::error::AggregatorError;
use futures::future::join_all;
use std::fmt;
use std::time::Duration;
use symposium_domain::{Excerpt, Quote, SourceBundle, Work};
use symposium_sources::{
    GutendexClient, OpenLibraryClient, SourceClient, SourceSet, WikiquoteClient,
};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// How one source branch ended for one subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchStatus {
    /// The source produced material
    Delivered,

    /// The source had nothing, or failed and was absorbed
    Empty,

    /// The branch hit its deadline
    TimedOut,
}

impl BranchStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchStatus::Delivered => "delivered",
            BranchStatus::Empty => "empty",
            BranchStatus::TimedOut => "timed-out",
        }
    }
}

impl fmt::Display for BranchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-branch outcome for one subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchReport {
    /// Quotation branch
    pub quotation: BranchStatus,
    /// Bibliography branch
    pub bibliography: BranchStatus,
    /// Full-text branch
    pub full_text: BranchStatus,
}

impl BranchReport {
    /// Number of branches that delivered material
    pub fn delivered(&self) -> usize {
        [self.quotation, self.bibliography, self.full_text]
            .iter()
            .filter(|s| **s == BranchStatus::Delivered)
            .count()
    }
}

/// Aggregation result for one subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectMaterial {
    /// The subject as requested
    pub subject: String,

    /// Merged material
    pub bundle: SourceBundle,

    /// How each branch ended
    pub report: BranchReport,
}

/// Material whose emptiness a branch can report
pub trait BranchMaterial: Default {
    /// True when the branch produced nothing
    fn is_absent(&self) -> bool;
}

impl<T> BranchMaterial for Vec<T> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T> BranchMaterial for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

/// Run one source for one subject under a deadline
async fn run_branch<S>(source: &S, subject: &str, deadline: Duration) -> (S::Material, BranchStatus)
where
    S: SourceClient,
    S::Material: BranchMaterial,
{
    match timeout(deadline, source.fetch_for(subject)).await {
        Ok(material) if material.is_absent() => (material, BranchStatus::Empty),
        Ok(material) => (material, BranchStatus::Delivered),
        Err(_) => {
            warn!(source = %source.kind(), subject, ?deadline, "Source branch timed out");
            (S::Material::default(), BranchStatus::TimedOut)
        }
    }
}

/// Gathers quotes, works and an excerpt per subject
///
/// The three branches of one subject run concurrently and are isolated
/// from each other: whatever one branch yields or fails to yield does not
/// change the others. Nothing is cached; every call refetches.
#[derive(Debug, Clone)]
pub struct MaterialAggregator<Q, B, F> {
    quotation: Q,
    bibliography: B,
    full_text: F,
    config: AggregatorConfig,
}

impl MaterialAggregator<WikiquoteClient, OpenLibraryClient, GutendexClient> {
    /// Create an aggregator over the public sources
    pub fn from_sources(sources: SourceSet, config: AggregatorConfig) -> Result<Self, AggregatorError> {
        Self::new(sources.quotation, sources.bibliography, sources.full_text, config)
    }
}

impl<Q, B, F> MaterialAggregator<Q, B, F>
where
    Q: SourceClient<Material = Vec<Quote>>,
    B: SourceClient<Material = Vec<Work>>,
    F: SourceClient<Material = Option<Excerpt>>,
{
    /// Create an aggregator over explicit sources
    pub fn new(
        quotation: Q,
        bibliography: B,
        full_text: F,
        config: AggregatorConfig,
    ) -> Result<Self, AggregatorError> {
        config.validate().map_err(AggregatorError::Config)?;
        Ok(Self {
            quotation,
            bibliography,
            full_text,
            config,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Gather material for one subject
    pub async fn aggregate(&self, subject: &str) -> SubjectMaterial {
        let deadline = self.config.branch_deadline();

        let ((quotes, quotation), (works, bibliography), (excerpt, full_text)) = tokio::join!(
            run_branch(&self.quotation, subject, deadline),
            run_branch(&self.bibliography, subject, deadline),
            run_branch(&self.full_text, subject, deadline),
        );

        let report = BranchReport {
            quotation,
            bibliography,
            full_text,
        };
        let bundle = SourceBundle::new(subject, quotes, works, excerpt);

        if bundle.is_empty() {
            debug!(subject, "No enrichment material found");
        }
        info!(
            subject,
            quotes = bundle.quotes().len(),
            works = bundle.works().len(),
            excerpt = bundle.excerpt().is_some(),
            "Material aggregated"
        );

        SubjectMaterial {
            subject: subject.to_string(),
            bundle,
            report,
        }
    }

    /// Gather material for several subjects at once
    ///
    /// Results follow the input order, not completion order. Repeated
    /// subjects are fetched again.
    pub async fn aggregate_all<S: AsRef<str>>(&self, subjects: &[S]) -> Vec<SubjectMaterial> {
        join_all(subjects.iter().map(|s| self.aggregate(s.as_ref()))).await
    }
}
