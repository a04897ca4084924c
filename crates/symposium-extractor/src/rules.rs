//! Ordered date-rule cascade
//!
//! Each rule inspects the biography text and either explains it with a
//! [`DateMatch`] or passes. Rules run in [`CASCADE`] order and the first
//! match wins; later rules are looser and would misread text an earlier
//! rule already handles.

use crate::config::ExtractorConfig;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use symposium_domain::Confidence;

static LIFESPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]*?([0-9]{4})[^)]*?[–-][^)]*?([0-9]{4})[^)]*?\)").unwrap()
});

static CIRCA_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(c\.?\s*([0-9]{1,4})\s*[–-]\s*c?\.?\s*([0-9]{1,4})\s*(BCE?|CE|AD)?\)").unwrap()
});

static BOTH_BCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:c\.?\s*)?([0-9]{1,4})\s*(?:BCE?\s*)?[–-]\s*(?:c\.?\s*)?([0-9]{1,4})\s*BCE?\b")
        .unwrap()
});

static MIXED_ERA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:c\.?\s*)?([0-9]{1,4})\s*BCE?\s*[–-]\s*(?:AD|CE)\s*([0-9]{1,4})").unwrap()
});

static DIED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bdied\b([^.]*?)([0-9]{4})").unwrap());

static BRACKET_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*?([0-9]{4})[^)]*\)").unwrap());

static BORN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(born\s+[^)]*?([0-9]{4})\s*\)").unwrap());

static PRESENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(([0-9]{4})\s*[–-]\s*present\)").unwrap());

static AGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\baged?\s+[0-9]+\)").unwrap());

/// Text handed to every rule
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    /// Leading window of the text, for the explicit-span rules
    pub intro: &'a str,

    /// Whole text, for the keyword and single-year rules
    pub full: &'a str,

    /// Heuristic constants
    pub config: &'a ExtractorConfig,

    /// Year used for the sanity check
    pub current_year: i32,
}

/// What a rule concluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// Birth year, negative for BCE
    pub birth_year: Option<i32>,

    /// Death year, negative for BCE
    pub death_year: Option<i32>,

    /// Whether the person is believed to have died
    pub deceased: bool,

    /// Trust in the years
    pub confidence: Confidence,

    /// Era label taken from the matched text, if the rule has one
    pub era: Option<String>,
}

/// One named step of the cascade
#[derive(Clone, Copy)]
pub struct DateRule {
    /// Short rule name, logged when the rule fires
    pub name: &'static str,

    /// The rule itself
    pub apply: fn(&RuleInput<'_>) -> Option<DateMatch>,
}

impl std::fmt::Debug for DateRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateRule").field("name", &self.name).finish()
    }
}

/// Rules in priority order
pub const CASCADE: &[DateRule] = &[
    DateRule { name: "lifespan", apply: lifespan },
    DateRule { name: "circa-span", apply: circa_span },
    DateRule { name: "both-bce", apply: both_bce },
    DateRule { name: "mixed-era", apply: mixed_era },
    DateRule { name: "died-keyword", apply: died_keyword },
    DateRule { name: "early-birth-year", apply: early_birth_year },
    DateRule { name: "living", apply: living },
];

/// Run the cascade, returning the first rule that fires
pub fn run_cascade(input: &RuleInput<'_>) -> Option<(&'static str, DateMatch)> {
    CASCADE
        .iter()
        .find_map(|rule| (rule.apply)(input).map(|m| (rule.name, m)))
}

fn year(caps: &Captures<'_>, group: usize) -> Option<i32> {
    caps.get(group)?.as_str().parse().ok()
}

/// Bracket content with the enclosing parentheses removed
fn bracket_era(span: &str) -> String {
    span.trim_start_matches('(').trim_end_matches(')').trim().to_string()
}

fn plausible_ce_span(birth: i32, death: i32, current_year: i32) -> bool {
    birth > 0 && death > birth && death <= current_year
}

fn certain(birth: i32, death: i32, era: String) -> DateMatch {
    DateMatch {
        birth_year: Some(birth),
        death_year: Some(death),
        deceased: true,
        confidence: Confidence::Certain,
        era: Some(era),
    }
}

/// Two explicit four-digit years in one bracket, e.g. "(15 April 1452 – 2 May 1519)"
pub fn lifespan(input: &RuleInput<'_>) -> Option<DateMatch> {
    let caps = LIFESPAN.captures(input.intro)?;
    let (birth, death) = (year(&caps, 1)?, year(&caps, 2)?);
    if !plausible_ce_span(birth, death, input.current_year) {
        return None;
    }
    Some(certain(birth, death, bracket_era(&caps[0])))
}

/// Circa span in a bracket with an optional era suffix, e.g. "(c. 470 – 399 BC)"
pub fn circa_span(input: &RuleInput<'_>) -> Option<DateMatch> {
    let caps = CIRCA_SPAN.captures(input.intro)?;
    let (birth, death) = (year(&caps, 1)?, year(&caps, 2)?);
    let bce = caps
        .get(3)
        .is_some_and(|suffix| suffix.as_str().to_uppercase().starts_with("BC"));

    if bce {
        if birth <= death || death == 0 {
            return None;
        }
        Some(certain(-birth, -death, bracket_era(&caps[0])))
    } else if plausible_ce_span(birth, death, input.current_year) {
        Some(certain(birth, death, bracket_era(&caps[0])))
    } else {
        None
    }
}

/// Two BCE years, e.g. "470–399 BC" or "c. 1303 BC – 1213 BC"
pub fn both_bce(input: &RuleInput<'_>) -> Option<DateMatch> {
    let caps = BOTH_BCE.captures(input.intro)?;
    let (birth, death) = (year(&caps, 1)?, year(&caps, 2)?);
    if birth <= death || birth > input.config.max_bce_year || death <= 0 {
        return None;
    }
    Some(certain(-birth, -death, caps[0].trim().to_string()))
}

/// BCE birth and CE death, e.g. "c. 4 BC – AD 30"
pub fn mixed_era(input: &RuleInput<'_>) -> Option<DateMatch> {
    let caps = MIXED_ERA.captures(input.intro)?;
    let (birth, death) = (year(&caps, 1)?, year(&caps, 2)?);
    if -birth >= death {
        return None;
    }
    Some(certain(-birth, death, caps[0].trim().to_string()))
}

/// "died" followed closely by a four-digit year
pub fn died_keyword(input: &RuleInput<'_>) -> Option<DateMatch> {
    DIED.captures_iter(input.full)
        .filter(|caps| caps[1].chars().count() <= input.config.died_window_chars)
        .find_map(|caps| year(&caps, 2))
        .map(|death| DateMatch {
            birth_year: None,
            death_year: Some(death),
            deceased: true,
            confidence: Confidence::Inferred,
            era: None,
        })
}

/// First bracketed four-digit year, read as a birth year
fn bracketed_birth_year(text: &str) -> Option<(i32, String)> {
    let caps = BRACKET_YEAR.captures(text)?;
    Some((year(&caps, 1)?, bracket_era(&caps[0])))
}

/// A lone bracketed birth year early enough that the person has died
pub fn early_birth_year(input: &RuleInput<'_>) -> Option<DateMatch> {
    let (birth, era) = bracketed_birth_year(input.full)?;
    if birth >= input.config.living_cutoff_year {
        return None;
    }
    Some(DateMatch {
        birth_year: Some(birth),
        death_year: None,
        deceased: true,
        confidence: Confidence::Inferred,
        era: Some(era),
    })
}

fn alive(birth: Option<i32>, era: Option<String>) -> DateMatch {
    DateMatch {
        birth_year: birth,
        death_year: None,
        deceased: false,
        confidence: Confidence::Inferred,
        era,
    }
}

/// "(born 1950)", "(1950–present)", "age 73)" or "(aged 73)"
///
/// A year is trusted as a living person's birth year only after the
/// cutoff. The age forms carry no year of their own and borrow the first
/// bracketed year when there is one.
pub fn living(input: &RuleInput<'_>) -> Option<DateMatch> {
    let cutoff = input.config.living_cutoff_year;

    for pattern in [&*BORN, &*PRESENT] {
        if let Some(caps) = pattern.captures(input.full) {
            if let Some(birth) = year(&caps, 1).filter(|y| *y > cutoff) {
                return Some(alive(Some(birth), Some(bracket_era(&caps[0]))));
            }
        }
    }

    if AGE.is_match(input.full) {
        return match bracketed_birth_year(input.full) {
            Some((birth, era)) if birth > cutoff => Some(alive(Some(birth), Some(era))),
            Some(_) => None,
            None => Some(alive(None, None)),
        };
    }

    None
}
