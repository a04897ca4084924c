//! Integration tests for MaterialAggregator
//!
//! Scripted sources with delays and failures verify result ordering,
//! branch isolation and the branch deadline. Time is paused so delays are
//! virtual.

use std::time::Duration;
use symposium_aggregator::{AggregatorConfig, BranchStatus, MaterialAggregator};
use symposium_domain::{Excerpt, Quote, Work};
use symposium_sources::{MockSource, SourceKind};

struct Sources {
    quotes: MockSource<Vec<Quote>>,
    works: MockSource<Vec<Work>>,
    texts: MockSource<Option<Excerpt>>,
}

impl Sources {
    fn new() -> Self {
        Self {
            quotes: MockSource::new(SourceKind::Quotation),
            works: MockSource::new(SourceKind::Bibliography),
            texts: MockSource::new(SourceKind::FullText),
        }
    }

    fn aggregator(
        &self,
    ) -> MaterialAggregator<MockSource<Vec<Quote>>, MockSource<Vec<Work>>, MockSource<Option<Excerpt>>>
    {
        MaterialAggregator::new(
            self.quotes.clone(),
            self.works.clone(),
            self.texts.clone(),
            AggregatorConfig::default(),
        )
        .unwrap()
    }
}

fn quotes(subject: &str) -> Vec<Quote> {
    vec![Quote::new(format!("{subject} said something memorable."))]
}

fn works(subject: &str) -> Vec<Work> {
    vec![Work::new(format!("Collected Works of {subject}"))]
}

fn excerpt(subject: &str) -> Option<Excerpt> {
    Some(Excerpt {
        work_title: format!("Collected Works of {subject}"),
        text: format!("A paragraph written by {subject}."),
    })
}

#[tokio::test(start_paused = true)]
async fn test_results_keep_input_order() {
    let sources = Sources::new();
    let slow = Duration::from_secs(5);
    sources.quotes.respond_after("Plato", quotes("Plato"), slow);
    sources.works.respond_after("Plato", works("Plato"), slow);
    sources.texts.respond_after("Plato", excerpt("Plato"), slow);
    sources.quotes.respond("Socrates", quotes("Socrates"));
    sources.works.respond("Socrates", works("Socrates"));
    sources.texts.respond("Socrates", excerpt("Socrates"));

    let results = sources.aggregator().aggregate_all(&["Plato", "Socrates"]).await;

    let subjects: Vec<&str> = results.iter().map(|r| r.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Plato", "Socrates"]);
    assert_eq!(results[0].bundle.subject(), "Plato");
    assert_eq!(results[0].bundle.quotes(), quotes("Plato").as_slice());
    assert_eq!(results[1].bundle.works(), works("Socrates").as_slice());
}

#[tokio::test(start_paused = true)]
async fn test_subjects_run_concurrently() {
    let sources = Sources::new();
    for subject in ["A", "B", "C"] {
        sources.quotes.respond_after(subject, quotes(subject), Duration::from_secs(3));
    }

    let started = tokio::time::Instant::now();
    let results = sources.aggregator().aggregate_all(&["A", "B", "C"]).await;

    assert_eq!(results.len(), 3);
    assert!(started.elapsed() < Duration::from_secs(6));
}

#[tokio::test(start_paused = true)]
async fn test_failed_branch_is_isolated() {
    let sources = Sources::new();
    sources.quotes.respond("Plato", quotes("Plato"));
    sources.works.respond("Plato", works("Plato"));
    sources.texts.respond("Plato", excerpt("Plato"));
    sources.quotes.respond("Socrates", quotes("Socrates"));
    sources.works.respond("Socrates", works("Socrates"));
    sources.texts.fail("Socrates", "connection reset");

    let results = sources.aggregator().aggregate_all(&["Plato", "Socrates"]).await;

    let plato = &results[0];
    assert!(plato.bundle.excerpt().is_some());
    assert_eq!(plato.report.delivered(), 3);

    let socrates = &results[1];
    assert_eq!(socrates.bundle.quotes().len(), 1);
    assert_eq!(socrates.bundle.works().len(), 1);
    assert!(socrates.bundle.excerpt().is_none());
    assert_eq!(socrates.report.full_text, BranchStatus::Empty);
    assert_eq!(socrates.report.quotation, BranchStatus::Delivered);
}

#[tokio::test(start_paused = true)]
async fn test_slow_failure_does_not_hold_other_branches() {
    let sources = Sources::new();
    sources.quotes.respond("Seneca", quotes("Seneca"));
    sources
        .works
        .respond_after("Seneca", works("Seneca"), Duration::from_secs(1));
    sources
        .texts
        .fail_after("Seneca", "upstream returned 502", Duration::from_secs(3));

    let started = tokio::time::Instant::now();
    let material = sources.aggregator().aggregate("Seneca").await;

    assert!(started.elapsed() < Duration::from_secs(4));
    assert_eq!(sources.texts.call_count(), 1);
    assert_eq!(material.report.full_text, BranchStatus::Empty);
    assert_eq!(material.report.quotation, BranchStatus::Delivered);
    assert_eq!(material.report.bibliography, BranchStatus::Delivered);
    assert!(material.bundle.excerpt().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_hung_branch_hits_deadline() {
    let sources = Sources::new();
    sources.quotes.respond("Thoreau", quotes("Thoreau"));
    sources.works.respond("Thoreau", works("Thoreau"));
    sources
        .texts
        .respond_after("Thoreau", excerpt("Thoreau"), Duration::from_secs(600));

    let started = tokio::time::Instant::now();
    let material = sources.aggregator().aggregate("Thoreau").await;

    assert!(started.elapsed() < Duration::from_secs(11));
    assert_eq!(material.report.full_text, BranchStatus::TimedOut);
    assert_eq!(material.report.quotation, BranchStatus::Delivered);
    assert_eq!(material.report.bibliography, BranchStatus::Delivered);
    assert!(material.bundle.excerpt().is_none());
    assert_eq!(material.bundle.works().len(), 1);
}

#[tokio::test]
async fn test_no_material_is_valid_result() {
    let sources = Sources::new();
    let material = sources.aggregator().aggregate("Nobody").await;

    assert!(material.bundle.is_empty());
    assert_eq!(material.report.delivered(), 0);
    assert_eq!(material.report.quotation, BranchStatus::Empty);
}

#[tokio::test]
async fn test_repeated_subjects_are_refetched() {
    let sources = Sources::new();
    sources.quotes.respond("Plato", quotes("Plato"));
    sources.works.respond("Plato", works("Plato"));

    let aggregator = sources.aggregator();
    let results = aggregator.aggregate_all(&["Plato", "Plato"]).await;
    aggregator.aggregate("Plato").await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0], results[1]);
    assert_eq!(sources.quotes.call_count(), 3);
    assert_eq!(sources.works.call_count(), 3);
}

#[tokio::test]
async fn test_bundle_bounds_applied() {
    let sources = Sources::new();
    let many: Vec<Quote> = (0..9)
        .map(|i| Quote::new(format!("Quote {i} is long enough to be kept.")))
        .collect();
    sources.quotes.respond("Plato", many);

    let material = sources.aggregator().aggregate("Plato").await;
    assert_eq!(material.bundle.quotes().len(), 5);
    assert_eq!(material.bundle.quotes()[0].text, "Quote 0 is long enough to be kept.");
}
