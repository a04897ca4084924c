//! Source material gathered for one subject

/// A quote-like line mined from a quotation source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quote text, trimmed
    pub text: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A work attributed to the subject by a bibliography source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Work {
    /// Work title, never empty
    pub title: String,
}

impl Work {
    /// Create a new work
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A few paragraphs taken from a public-domain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    /// Title of the work the excerpt comes from
    pub work_title: String,

    /// Paragraphs joined by blank lines
    pub text: String,
}

/// Merged per-subject result of quote, work and excerpt aggregation
///
/// Immutable once constructed. The list bounds are enforced by
/// [`SourceBundle::new`], which keeps the first entries in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBundle {
    subject: String,
    quotes: Vec<Quote>,
    works: Vec<Work>,
    excerpt: Option<Excerpt>,
}

impl SourceBundle {
    /// Maximum quotes kept per subject
    pub const MAX_QUOTES: usize = 5;

    /// Maximum works kept per subject
    pub const MAX_WORKS: usize = 5;

    /// Build a bundle, truncating quotes and works to their bounds
    pub fn new(
        subject: impl Into<String>,
        mut quotes: Vec<Quote>,
        mut works: Vec<Work>,
        excerpt: Option<Excerpt>,
    ) -> Self {
        quotes.truncate(Self::MAX_QUOTES);
        works.truncate(Self::MAX_WORKS);
        Self {
            subject: subject.into(),
            quotes,
            works,
            excerpt,
        }
    }

    /// A bundle with no material at all
    pub fn empty(subject: impl Into<String>) -> Self {
        Self::new(subject, Vec::new(), Vec::new(), None)
    }

    /// The subject this bundle was gathered for
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Quotes in source order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Works in source order
    pub fn works(&self) -> &[Work] {
        &self.works
    }

    /// The excerpt, if any full-text source yielded one
    pub fn excerpt(&self) -> Option<&Excerpt> {
        self.excerpt.as_ref()
    }

    /// True when no source produced anything
    ///
    /// This is a valid result meaning "no enrichment material found".
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty() && self.works.is_empty() && self.excerpt.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_truncates_lists() {
        let quotes = (0..8).map(|i| Quote::new(format!("quote {i}"))).collect();
        let works = (0..7).map(|i| Work::new(format!("work {i}"))).collect();
        let bundle = SourceBundle::new("Plato", quotes, works, None);

        assert_eq!(bundle.quotes().len(), SourceBundle::MAX_QUOTES);
        assert_eq!(bundle.works().len(), SourceBundle::MAX_WORKS);
        assert_eq!(bundle.quotes()[0].text, "quote 0");
        assert_eq!(bundle.works()[4].title, "work 4");
    }

    #[test]
    fn test_empty_bundle() {
        let bundle = SourceBundle::empty("Nobody");
        assert!(bundle.is_empty());
        assert_eq!(bundle.subject(), "Nobody");

        let with_excerpt = SourceBundle::new(
            "Plato",
            Vec::new(),
            Vec::new(),
            Some(Excerpt {
                work_title: "The Republic".to_string(),
                text: "Socrates speaks.".to_string(),
            }),
        );
        assert!(!with_excerpt.is_empty());
    }
}
