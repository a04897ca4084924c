//! Symposium Aggregator
//!
//! Fans out to the quotation, bibliography and full-text sources for each
//! subject and merges whatever comes back into a [`SourceBundle`].
//!
//! # Architecture
//!
//! ```text
//!              ┌─ Quotation ────┐
//! Subject ─────┼─ Bibliography ─┼──→ SourceBundle + BranchReport
//!              └─ FullText ─────┘
//! ```
//!
//! - Branches of one subject run concurrently, each under its own deadline
//! - A failed, empty or timed-out branch leaves its siblings untouched
//! - Subjects requested together run concurrently; results keep input order
//!
//! # Example Usage
//!
//! ```
//! use symposium_aggregator::{AggregatorConfig, MaterialAggregator};
//! use symposium_domain::{Excerpt, Quote, Work};
//! use symposium_sources::{MockSource, SourceKind};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let quotes = MockSource::new(SourceKind::Quotation);
//! quotes.respond("Plato", vec![Quote::new("The unexamined life is not worth living.")]);
//! let works: MockSource<Vec<Work>> = MockSource::new(SourceKind::Bibliography);
//! let texts: MockSource<Option<Excerpt>> = MockSource::new(SourceKind::FullText);
//!
//! let aggregator =
//!     MaterialAggregator::new(quotes, works, texts, AggregatorConfig::default()).unwrap();
//! let results = aggregator.aggregate_all(&["Plato", "Nobody"]).await;
//!
//! assert_eq!(results[0].bundle.quotes().len(), 1);
//! assert!(results[1].bundle.is_empty());
//! # }
//! ```
//!
//! [`SourceBundle`]: symposium_domain::SourceBundle

#![warn(missing_docs)]

mod aggregator;
mod config;
mod error;

pub use aggregator::{
    BranchMaterial, BranchReport, BranchStatus, MaterialAggregator, SubjectMaterial,
};
pub use config::AggregatorConfig;
pub use error::AggregatorError;
