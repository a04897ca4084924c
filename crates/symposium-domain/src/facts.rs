//! Biographical facts mined from a biography extract

use std::fmt;

/// How much the date heuristics trust a result
///
/// - Certain: an explicit, unambiguous date span was found
/// - Inferred: a guess from partial evidence (a death keyword, a lone year)
/// - Unknown: nothing usable; years are absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Confidence {
    /// Explicit date span
    Certain,

    /// Heuristic guess from partial evidence
    Inferred,

    /// No usable evidence
    #[default]
    Unknown,
}

impl Confidence {
    /// Get the confidence tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Certain => "certain",
            Confidence::Inferred => "inferred",
            Confidence::Unknown => "unknown",
        }
    }

    /// Parse a confidence tier from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "certain" => Some(Confidence::Certain),
            "inferred" => Some(Confidence::Inferred),
            "unknown" => Some(Confidence::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid confidence: {}", s))
    }
}

/// Structured facts about one person
///
/// Years are signed: a negative year is BCE. When both years are present
/// the birth year precedes the death year on the number line, which covers
/// CE spans (1452 < 1519), BCE spans (-470 < -399) and mixed spans
/// (-4 < 30) alike.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonFacts {
    /// Verbatim date span or century phrase, empty when none was found
    pub era: String,

    /// Birth year, negative for BCE
    pub birth_year: Option<i32>,

    /// Death year, negative for BCE
    pub death_year: Option<i32>,

    /// Whether the person is believed to have died
    pub deceased: bool,

    /// Trust in the year fields
    pub confidence: Confidence,

    /// One-line description, never empty once extracted
    pub description: String,
}

impl PersonFacts {
    /// Facts with no determination: living, unknown confidence, no years
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Check the BCE-aware ordering of the lifespan
    ///
    /// Returns true when either year is absent.
    pub fn has_ordered_lifespan(&self) -> bool {
        match (self.birth_year, self.death_year) {
            (Some(birth), Some(death)) => birth < death,
            _ => true,
        }
    }

    /// Human readable lifespan such as "470 BCE – 399 BCE" or "born 1950"
    pub fn lifespan_label(&self) -> Option<String> {
        match (self.birth_year, self.death_year) {
            (Some(birth), Some(death)) => {
                Some(format!("{} – {}", format_year(birth), format_year(death)))
            }
            (Some(birth), None) => Some(format!("born {}", format_year(birth))),
            (None, Some(death)) => Some(format!("died {}", format_year(death))),
            (None, None) => None,
        }
    }
}

/// Render a signed year, negative years as BCE
///
/// # Examples
///
/// ```
/// use symposium_domain::format_year;
///
/// assert_eq!(format_year(1519), "1519");
/// assert_eq!(format_year(-399), "399 BCE");
/// ```
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("{} BCE", year.unsigned_abs())
    } else {
        year.to_string()
    }
}
