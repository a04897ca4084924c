//! Symposium Domain Layer
//!
//! Value objects shared by every Symposium crate. Everything here is
//! request-scoped: facts, bundles and transcripts are built fresh for one
//! lookup and dropped afterwards. The only long-lived structure is the
//! [`GuestRoster`], which the caller owns and passes around explicitly.
//!
//! ## Key Concepts
//!
//! - **Subject**: a person's display name, the lookup key for every source
//! - **PersonFacts**: lifespan, era and a one-line description mined from prose
//! - **SourceBundle**: quotes, works and an excerpt gathered for one subject
//! - **Transcript**: ordered, never-empty speaker turns cut from generated text
//!
//! ## Architecture
//!
//! - No I/O, no async, no logging
//! - The only external dependency is `uuid` for guest identifiers
//! - Infrastructure (HTTP sources, heuristics) lives in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dialogue;
pub mod facts;
pub mod guest;
pub mod material;

// Re-exports for convenience
pub use dialogue::{DialogueTurn, Transcript, FALLBACK_SPEAKER};
pub use facts::{format_year, Confidence, PersonFacts};
pub use guest::{Guest, GuestRoster};
pub use material::{Excerpt, Quote, SourceBundle, Work};

/// Last whitespace-delimited token of a subject name.
///
/// Used by the bibliography and full-text sources to reject works by a
/// different author.
///
/// # Examples
///
/// ```
/// use symposium_domain::surname;
///
/// assert_eq!(surname("Marcus Aurelius"), "Aurelius");
/// assert_eq!(surname("Socrates"), "Socrates");
/// assert_eq!(surname("   "), "");
/// ```
pub fn surname(subject: &str) -> &str {
    subject.split_whitespace().last().unwrap_or("")
}

/// First whitespace-delimited token of a subject name.
pub fn first_name(subject: &str) -> &str {
    subject.split_whitespace().next().unwrap_or("")
}
