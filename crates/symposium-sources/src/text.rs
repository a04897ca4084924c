//! Pure text helpers shared by the source adapters
//!
//! Everything here is synchronous and side-effect free so the heuristics can
//! be tested without a network.

use regex::Regex;
use std::sync::LazyLock;
use symposium_domain::{surname, Quote};

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static YEAR_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}").unwrap());
static SECTION_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w\s]+:$").unwrap());
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Front-matter markers in public-domain texts
const START_MARKERS: [&str; 4] = ["*** START OF", "***START OF", "CHAPTER", "BOOK "];

/// Remove HTML tags
pub fn strip_html(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Decode the handful of entities search snippets carry
pub fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// First `max` characters of `text`, cut on a char boundary
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// True when `author` contains the subject's surname, ignoring case
///
/// Rejects wrong-author collisions in catalog searches. A subject without
/// any name token matches nothing.
pub fn author_matches(author: &str, subject: &str) -> bool {
    let surname = surname(subject).to_lowercase();
    !surname.is_empty() && author.to_lowercase().contains(&surname)
}

/// Bounds for quote-like lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteFilter {
    /// Lines must be longer than this (characters)
    pub min_chars: usize,
    /// Lines must be shorter than this (characters)
    pub max_chars: usize,
    /// Maximum lines kept
    pub limit: usize,
}

impl Default for QuoteFilter {
    fn default() -> Self {
        Self {
            min_chars: 30,
            max_chars: 500,
            limit: 5,
        }
    }
}

impl QuoteFilter {
    /// Whether one trimmed line qualifies as a quote
    pub fn is_quote_candidate(&self, line: &str) -> bool {
        let len = line.chars().count();
        len > self.min_chars
            && len < self.max_chars
            && !line.starts_with("==")
            && !YEAR_HEADER.is_match(line)
            && !SECTION_LABEL.is_match(line)
            && line.ends_with(['.', '!', '?', '"', '\u{201D}'])
    }

    /// Mine quote-like lines from a page extract, in source order
    pub fn parse_quotes(&self, text: &str) -> Vec<Quote> {
        text.lines()
            .map(str::trim)
            .filter(|line| self.is_quote_candidate(line))
            .take(self.limit)
            .map(Quote::new)
            .collect()
    }
}

/// Bounds for excerpt extraction from a full text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcerptWindow {
    /// Characters read after the front matter
    pub window_chars: usize,
    /// Paragraphs must be longer than this (characters)
    pub paragraph_min_chars: usize,
    /// Paragraphs must be shorter than this (characters)
    pub paragraph_max_chars: usize,
    /// Maximum paragraphs kept
    pub max_paragraphs: usize,
}

impl Default for ExcerptWindow {
    fn default() -> Self {
        Self {
            window_chars: 3000,
            paragraph_min_chars: 50,
            paragraph_max_chars: 500,
            max_paragraphs: 3,
        }
    }
}

impl ExcerptWindow {
    /// Pull a few clean paragraphs from the body of a public-domain text
    ///
    /// Skips past the furthest front-matter marker line, reads a fixed
    /// window and keeps mid-sized paragraphs with internal whitespace
    /// collapsed. Returns `None` when no paragraph qualifies.
    pub fn extract_excerpt(&self, text: &str) -> Option<String> {
        let text = text.replace("\r\n", "\n");
        let start = body_start(&text);
        let window = truncate_chars(&text[start..], self.window_chars);

        let paragraphs: Vec<String> = PARAGRAPH_BREAK
            .split(window)
            .map(|p| WHITESPACE.replace_all(p.trim(), " ").into_owned())
            .filter(|p| {
                let len = p.chars().count();
                len > self.paragraph_min_chars && len < self.paragraph_max_chars
            })
            .take(self.max_paragraphs)
            .collect();

        if paragraphs.is_empty() {
            None
        } else {
            Some(paragraphs.join("\n\n"))
        }
    }
}

/// Byte offset of the line following the furthest front-matter marker
fn body_start(text: &str) -> usize {
    START_MARKERS
        .iter()
        .filter_map(|marker| {
            let idx = text.find(marker)?;
            let newline = text[idx..].find('\n')?;
            Some(idx + newline + 1)
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strip_html_and_entities() {
        let snippet = r#"<span class="searchmatch">Plato</span> was an &quot;Athenian&quot; &amp; more"#;
        assert_eq!(
            decode_entities(&strip_html(snippet)),
            r#"Plato was an "Athenian" & more"#
        );
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("Sōkratēs", 3), "Sōk");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_author_matches_surname() {
        assert!(author_matches("Dickens, Charles", "Charles Dickens"));
        assert!(author_matches("PLATO", "Plato"));
        assert!(!author_matches("Dickinson, Emily", "Charles Dickens"));
        assert!(!author_matches("Anyone", "   "));
    }

    #[test]
    fn test_quote_filter_rejects_headers_and_labels() {
        let filter = QuoteFilter::default();
        let page = "\
== Quotes ==
1854 Walden
Sourced:
The mass of men lead lives of quiet desperation.
Too short.
This line is long enough but has no terminal punctuation
\u{201C}Rather than love, than money, than fame, give me truth.\u{201D}
";
        let quotes = filter.parse_quotes(page);
        assert_eq!(
            quotes,
            vec![
                Quote::new("The mass of men lead lives of quiet desperation."),
                Quote::new("\u{201C}Rather than love, than money, than fame, give me truth.\u{201D}"),
            ]
        );
    }

    #[test]
    fn test_quote_filter_keeps_first_five() {
        let filter = QuoteFilter::default();
        let page: String = (0..8)
            .map(|i| format!("Quote number {i} is certainly long enough to keep.\n"))
            .collect();
        let quotes = filter.parse_quotes(&page);
        assert_eq!(quotes.len(), 5);
        assert!(quotes[0].text.starts_with("Quote number 0"));
        assert!(quotes[4].text.starts_with("Quote number 4"));
    }

    #[test]
    fn test_excerpt_skips_front_matter() {
        let paragraph = "It was the best of times, it was the worst of times, it was the age of wisdom.";
        let text = format!(
            "Title page text that is long enough to be a paragraph but sits in front matter.\r\n\r\n\
             *** START OF THE PROJECT GUTENBERG EBOOK ***\r\n\r\n\
             {paragraph}\r\n\r\nShort.\r\n\r\n{paragraph}\r\n"
        );
        let excerpt = ExcerptWindow::default().extract_excerpt(&text).unwrap();
        assert_eq!(excerpt, format!("{paragraph}\n\n{paragraph}"));
    }

    #[test]
    fn test_excerpt_collapses_wrapped_lines() {
        let text = "CHAPTER I\n\nCall me Ishmael. Some years ago, never mind how long\nprecisely, having little money in my purse.\n";
        let excerpt = ExcerptWindow::default().extract_excerpt(text).unwrap();
        assert_eq!(
            excerpt,
            "Call me Ishmael. Some years ago, never mind how long precisely, having little money in my purse."
        );
    }

    #[test]
    fn test_excerpt_none_without_paragraphs() {
        assert!(ExcerptWindow::default().extract_excerpt("tiny\n\ntext").is_none());
    }

    proptest! {
        #[test]
        fn prop_quotes_within_bounds(lines in proptest::collection::vec(".{0,600}", 0..20)) {
            let filter = QuoteFilter::default();
            let page = lines.join("\n");
            let quotes = filter.parse_quotes(&page);

            prop_assert!(quotes.len() <= filter.limit);
            for quote in quotes {
                let len = quote.text.chars().count();
                prop_assert!(len > 30 && len < 500);
                prop_assert!(quote.text.ends_with(['.', '!', '?', '"', '”']));
            }
        }
    }
}
