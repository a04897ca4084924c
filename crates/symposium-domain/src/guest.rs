//! Dinner guests and the caller-owned roster

use crate::first_name;

/// Era used when a lookup found no dates
pub const DEFAULT_ERA: &str = "Historical figure";

/// Description used when a lookup found no description
pub const DEFAULT_DESCRIPTION: &str = "Notable person";

/// A dinner guest, either a preset figure or one added at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    /// Stable identifier; custom guests use `custom_<uuid>`
    pub id: String,

    /// Display name, also the subject used for source lookups
    pub name: String,

    /// Lifespan or era label
    pub era: String,

    /// One-line description
    pub description: String,

    /// Longer background handed to the prompt
    pub context: String,

    /// Grouping label ("Philosophy", "Custom", ...)
    pub category: String,

    /// Avatar initials
    pub initials: String,

    /// Whether this guest was added at runtime
    pub custom: bool,
}

impl Guest {
    /// Create a custom guest with a fresh identifier
    ///
    /// Blank `era` or `description` fall back to [`DEFAULT_ERA`] and
    /// [`DEFAULT_DESCRIPTION`].
    pub fn custom(name: &str, era: &str, description: &str) -> Self {
        let name = name.trim().to_string();
        let era = non_blank(era, DEFAULT_ERA);
        let description = non_blank(description, DEFAULT_DESCRIPTION);

        Self {
            id: format!("custom_{}", uuid::Uuid::now_v7().simple()),
            initials: initials(&name),
            context: format!("{} ({}): {}", name, era, description),
            category: "Custom".to_string(),
            custom: true,
            name,
            era,
            description,
        }
    }
}

fn non_blank(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Initials from the first and last name tokens, or the first two letters
/// of a single-token name
fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let raw: String = match parts.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect(),
    };
    raw.to_uppercase()
}

/// Guests known to one caller
///
/// Owned by the caller and passed by reference; there is no process-wide
/// roster. Preset guests are inserted by whoever owns the reference data.
#[derive(Debug, Clone, Default)]
pub struct GuestRoster {
    guests: Vec<Guest>,
}

impl GuestRoster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster seeded with preset guests
    pub fn with_presets(presets: impl IntoIterator<Item = Guest>) -> Self {
        Self {
            guests: presets.into_iter().collect(),
        }
    }

    /// Insert a guest; an existing guest with the same id is replaced
    pub fn insert(&mut self, guest: Guest) {
        match self.guests.iter_mut().find(|g| g.id == guest.id) {
            Some(existing) => *existing = guest,
            None => self.guests.push(guest),
        }
    }

    /// Create and add a custom guest, returning it
    pub fn add_custom(&mut self, name: &str, era: &str, description: &str) -> &Guest {
        let index = self.guests.len();
        self.guests.push(Guest::custom(name, era, description));
        &self.guests[index]
    }

    /// Remove a guest by id
    pub fn remove(&mut self, id: &str) -> Option<Guest> {
        let index = self.guests.iter().position(|g| g.id == id)?;
        Some(self.guests.remove(index))
    }

    /// Get a guest by id
    pub fn get(&self, id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == id)
    }

    /// Get guests by id in the requested order, skipping unknown ids
    pub fn get_many<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Guest> {
        ids.iter().filter_map(|id| self.get(id.as_ref())).collect()
    }

    /// All guests, presets first
    pub fn all(&self) -> &[Guest] {
        &self.guests
    }

    /// Only the custom guests
    pub fn custom(&self) -> Vec<&Guest> {
        self.guests.iter().filter(|g| g.custom).collect()
    }

    /// Drop every custom guest, keeping presets
    pub fn clear_custom(&mut self) {
        self.guests.retain(|g| !g.custom);
    }

    /// Find the guest a transcript speaker label refers to
    ///
    /// Matches when the guest's name contains the label, or the label
    /// contains the guest's first name, ignoring case.
    pub fn match_speaker(&self, label: &str) -> Option<&Guest> {
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return None;
        }
        self.guests.iter().find(|g| {
            let name = g.name.to_lowercase();
            let first = first_name(&name);
            name.contains(&label) || (!first.is_empty() && label.contains(first))
        })
    }

    /// Number of guests
    pub fn len(&self) -> usize {
        self.guests.len()
    }

    /// True when the roster has no guests
    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }
}
