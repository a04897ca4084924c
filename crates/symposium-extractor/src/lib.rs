//! Symposium Extractor
//!
//! Mines structured biographical facts from unstructured biography prose.
//!
//! # Overview
//!
//! Dates are found by an ordered cascade of heuristic rules over the text.
//! The first rule that explains the text wins, so explicit bracketed spans
//! take priority over keyword guesses. The era label comes from the
//! matched span, or a "Nth century" phrase when no rule matched. The
//! description is the opening sentence with the subject's name removed.
//!
//! # Architecture
//!
//! ```text
//! Subject → Biography source → intro extract → FactExtractor → PersonFacts
//! ```
//!
//! # Example Usage
//!
//! ```
//! use symposium_domain::Confidence;
//! use symposium_extractor::FactExtractor;
//!
//! let extractor = FactExtractor::default();
//! let facts = extractor.extract(
//!     "Leonardo da Vinci (1452–1519) was an Italian polymath of the High Renaissance.",
//!     "Leonardo da Vinci",
//! );
//!
//! assert_eq!(facts.birth_year, Some(1452));
//! assert_eq!(facts.death_year, Some(1519));
//! assert!(facts.deceased);
//! assert_eq!(facts.confidence, Confidence::Certain);
//! assert_eq!(facts.description, "Italian polymath of the High Renaissance");
//! ```

#![warn(missing_docs)]

mod config;
mod description;
mod error;
mod extractor;
pub mod rules;


pub use config::ExtractorConfig;
pub use description::FALLBACK_DESCRIPTION;
pub use error::ExtractorError;
pub use extractor::FactExtractor;
