//! Era fallback and one-line description

use crate::config::ExtractorConfig;
use regex::Regex;
use std::sync::LazyLock;
use symposium_domain::first_name;

/// Description used when nothing usable is left
pub const FALLBACK_DESCRIPTION: &str = "Historical figure";

static CENTURY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,2}(?:st|nd|rd|th)\s+century(?:\s*(?:BCE?|CE|AD)\b)?)").unwrap()
});

static PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NAME_VERB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[^,]*?\b(?:was|is)\s+(?:an?\s+)?").unwrap());
static APPOSITIVE_VERB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[^,]*,[^,]*,\s*(?:was|is)\s+(?:an?\s+)?").unwrap());
static LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:was|is)\s+(?:an?\s+)?").unwrap());

/// "Nth century [BCE/CE]" phrase, if the text has one
pub fn century_era(text: &str) -> Option<String> {
    CENTURY
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn collapse(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// `text` without a leading `prefix`, compared case-insensitively
fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if prefix.is_empty() || head.to_lowercase() != prefix.to_lowercase() {
        return None;
    }
    Some(&text[prefix.len()..])
}

/// What follows the linking verb after a name
///
/// `verb` must match before the first comma; otherwise the verb is looked
/// for right after an appositive clause set off by commas.
fn after_linking_verb(rest: &str, verb: &Regex) -> String {
    let trimmed = rest.trim_start_matches([',', ' ']);
    if let Some(m) = verb.find(trimmed) {
        return trimmed[m.end()..].to_string();
    }
    if let Some(m) = APPOSITIVE_VERB.find(rest) {
        return rest[m.end()..].to_string();
    }
    trimmed.to_string()
}

/// Remove the subject's name and the "was a"/"is an" that follows it
fn strip_subject(sentence: &str, subject: &str) -> String {
    let subject = subject.trim();

    if let Some(rest) = strip_prefix_ci(sentence, subject) {
        return after_linking_verb(rest, &LEADING_ARTICLE);
    }

    if let Some(rest) = strip_prefix_ci(sentence, first_name(subject)) {
        // A longer form of the name runs up to the linking verb
        return after_linking_verb(rest, &NAME_VERB);
    }

    LEADING_ARTICLE.replace(sentence, "").into_owned()
}

/// One-line description from the opening of a biography
///
/// Parentheticals are dropped before sentence splitting so that a "c." in
/// a date span does not end the first sentence.
pub fn describe(text: &str, subject: &str, config: &ExtractorConfig) -> String {
    let plain = collapse(&PARENTHETICAL.replace_all(text, ""));
    let mut sentences = SENTENCE_END.split(&plain).map(str::trim);

    let first = sentences.next().unwrap_or_default();
    let mut description = capitalize(collapse(&strip_subject(first, subject)).as_str());

    if description.chars().count() < config.description_min_chars {
        let widened = [first, sentences.next().unwrap_or_default()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(". ");
        description = truncate_chars(&widened, config.description_window_chars)
            .trim()
            .to_string();
        if widened.chars().count() > config.description_window_chars {
            description.push_str("...");
        }
    }

    if description.chars().count() > config.description_max_chars {
        let cut = truncate_chars(&description, config.description_max_chars - 3).trim_end();
        description = format!("{}...", cut);
    }

    if description.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe_default(text: &str, subject: &str) -> String {
        describe(text, subject, &ExtractorConfig::default())
    }

    #[test]
    fn test_century_era() {
        assert_eq!(
            century_era("a Chinese philosopher of the 6th century BC who").as_deref(),
            Some("6th century BC")
        );
        assert_eq!(century_era("active in the 12th century.").as_deref(), Some("12th century"));
        assert!(century_era("no era here").is_none());
    }

    #[test]
    fn test_strips_name_and_linking_verb() {
        assert_eq!(
            describe_default("Plato was an ancient Greek philosopher. He founded the Academy.", "Plato"),
            "Ancient Greek philosopher"
        );
    }

    #[test]
    fn test_strips_longer_form_of_name() {
        let text = "Leonardo di ser Piero da Vinci (15 April 1452 – 2 May 1519) was an Italian polymath of the High Renaissance.";
        assert_eq!(
            describe_default(text, "Leonardo da Vinci"),
            "Italian polymath of the High Renaissance"
        );
    }

    #[test]
    fn test_circa_does_not_split_sentence() {
        let text = "Socrates (c. 470 – 399 BC) was a Greek philosopher from Athens.";
        assert_eq!(describe_default(text, "Socrates"), "Greek philosopher from Athens");
    }

    #[test]
    fn test_short_description_widens() {
        let text = "Cher is a singer. She has sold over 100 million records worldwide";
        assert_eq!(
            describe_default(text, "Cher"),
            "Cher is a singer. She has sold over 100 million records worldwide"
        );
        assert_eq!(describe_default("Cher is a singer. She sang.", "Cher"), "Cher is a singer. She sang");
    }

    #[test]
    fn test_widened_description_marks_cut() {
        let config = ExtractorConfig {
            description_window_chars: 30,
            ..ExtractorConfig::default()
        };
        let text = "Cher is a singer. She has sold over 100 million records worldwide.";
        assert_eq!(describe(text, "Cher", &config), "Cher is a singer. She has sold...");
    }

    #[test]
    fn test_verb_inside_appositive_is_skipped() {
        let text = "Albert Hermann Einstein, whose theory is famous, was a German-born theoretical physicist.";
        assert_eq!(
            describe_default(text, "Albert Einstein"),
            "German-born theoretical physicist"
        );
        assert_eq!(
            strip_subject("Albert Einstein, whose theory is famous, was a physicist", "Albert Einstein"),
            "physicist"
        );
        assert_eq!(
            strip_subject("Albert Hermann Einstein, who won a prize", "Albert Einstein"),
            "Hermann Einstein, who won a prize"
        );
    }

    #[test]
    fn test_long_description_truncated() {
        let text = format!("Ada Lovelace was a {}.", "very ".repeat(40));
        let description = describe_default(&text, "Ada Lovelace");
        assert_eq!(description.chars().count(), 100);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_empty_text_falls_back() {
        assert_eq!(describe_default("", "Nobody"), FALLBACK_DESCRIPTION);
        assert_eq!(describe_default("(1452–1519)", "Nobody"), FALLBACK_DESCRIPTION);
    }
}
