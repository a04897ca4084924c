//! Prompt assembly for the conversation generator

use symposium_domain::{Guest, SourceBundle};

/// Verified quotes listed per guest
pub const PROMPT_QUOTES: usize = 3;

/// Characters of excerpt shown per guest
pub const PROMPT_EXCERPT_CHARS: usize = 500;

const BASE_INSTRUCTIONS: &[&str] = &[
    "Speak in each person's authentic voice, vocabulary and style of thought.",
    "Keep every turn to 2-4 sentences so the exchange stays lively.",
    "Let the guests respond to, build on and challenge one another.",
    "Keep each guest within the knowledge of their own lifetime.",
    "Bring out the places where their views genuinely differ.",
    "Give every guest at least two turns.",
    "Write 8-12 turns in total.",
    "Write only dialogue: no narration and no stage directions.",
];

const SOURCE_INSTRUCTIONS: &[&str] = &[
    "Work the verified quotes into the conversation where they fit, verbatim or lightly paraphrased.",
    "Let guests mention their notable works when the topic touches them.",
    "Use the excerpts to match each guest's prose style and concerns.",
];

const TURN_FORMAT: &str = "Format each speaker's turn as: **[Name]:** \"Their dialogue here.\"";

#[derive(Debug, Clone)]
struct Seat {
    name: String,
    era: String,
    context: String,
    material: Option<SourceBundle>,
}

/// Builds the prompt handed to a [`ConversationGenerator`]
///
/// When at least one guest brings source material the prompt lists it and
/// asks for it to be used; otherwise the plain variant is produced. Either
/// way the requested turn format is the one [`segment_dialogue`] reads.
///
/// # Examples
///
/// ```
/// use symposium_dialogue::PromptBuilder;
/// use symposium_domain::Guest;
///
/// let plato = Guest::custom("Plato", "428–348 BCE", "Athenian philosopher");
/// let prompt = PromptBuilder::new("justice").participant(&plato, None).build();
///
/// assert!(prompt.contains("- Plato (428–348 BCE): "));
/// assert!(prompt.contains("TOPIC: They are discussing justice."));
/// ```
///
/// [`ConversationGenerator`]: crate::ConversationGenerator
/// [`segment_dialogue`]: crate::segment_dialogue
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    topic: String,
    seats: Vec<Seat>,
}

impl PromptBuilder {
    /// Start a prompt about `topic`
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            seats: Vec::new(),
        }
    }

    /// Seat a guest, optionally with the material gathered for them
    pub fn participant(mut self, guest: &Guest, material: Option<SourceBundle>) -> Self {
        self.seats.push(Seat {
            name: guest.name.clone(),
            era: guest.era.clone(),
            context: guest.context.clone(),
            material: material.filter(|bundle| !bundle.is_empty()),
        });
        self
    }

    /// Whether any seated guest brings source material
    pub fn has_material(&self) -> bool {
        self.seats.iter().any(|seat| seat.material.is_some())
    }

    /// Render the prompt
    pub fn build(&self) -> String {
        let enhanced = self.has_material();
        let mut prompt = String::new();

        if enhanced {
            prompt.push_str(
                "You are simulating a dinner party conversation between these historical figures. \
                 Ground what they say in the VERIFIED QUOTES, NOTABLE WORKS and EXCERPTS listed \
                 below so their voices stay true to the record.\n\n",
            );
            prompt.push_str("PARTICIPANTS AND SOURCE MATERIAL:\n");
        } else {
            prompt.push_str(
                "You are simulating a dinner party conversation between these historical figures:\n",
            );
        }

        let seats: Vec<String> = self.seats.iter().map(render_seat).collect();
        prompt.push_str(&seats.join("\n\n"));

        prompt.push_str(&format!("\n\nTOPIC: They are discussing {}.\n\n", self.topic));
        prompt.push_str("INSTRUCTIONS:\n");

        let mut instructions: Vec<&str> = BASE_INSTRUCTIONS[..2].to_vec();
        if enhanced {
            instructions.extend_from_slice(SOURCE_INSTRUCTIONS);
        }
        instructions.extend_from_slice(&BASE_INSTRUCTIONS[2..]);
        instructions.push(TURN_FORMAT);

        for (i, line) in instructions.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", i + 1, line));
        }

        prompt.push_str(&format!(
            "\nBegin the dinner conversation now. Have someone naturally open the discussion on {}.",
            self.topic
        ));
        prompt
    }
}

fn render_seat(seat: &Seat) -> String {
    let mut out = format!("- {} ({}): {}", seat.name, seat.era, seat.context);
    let Some(bundle) = &seat.material else {
        return out;
    };

    if !bundle.quotes().is_empty() {
        out.push_str(&format!("\n  VERIFIED QUOTES from {}:", seat.name));
        for quote in bundle.quotes().iter().take(PROMPT_QUOTES) {
            out.push_str(&format!("\n  • \"{}\"", quote.text));
        }
    }

    if !bundle.works().is_empty() {
        let titles: Vec<&str> = bundle.works().iter().map(|w| w.title.as_str()).collect();
        out.push_str(&format!("\n  NOTABLE WORKS: {}", titles.join(", ")));
    }

    if let Some(excerpt) = bundle.excerpt() {
        let (text, cut) = clip(&excerpt.text, PROMPT_EXCERPT_CHARS);
        let ellipsis = if cut { "..." } else { "" };
        out.push_str(&format!(
            "\n  EXCERPT from \"{}\":\n  \"{}{}\"",
            excerpt.work_title, text, ellipsis
        ));
    }

    out
}

/// First `max` characters of `text`, and whether anything was cut
fn clip(text: &str, max: usize) -> (&str, bool) {
    match text.char_indices().nth(max) {
        Some((end, _)) => (&text[..end], true),
        None => (text, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symposium_domain::{Excerpt, Quote, Work};

    fn thoreau() -> Guest {
        Guest::custom("Henry David Thoreau", "1817–1862", "American essayist")
    }

    fn bundle() -> SourceBundle {
        let quotes = (1..=4)
            .map(|i| Quote::new(format!("Quote number {i} about simplicity and the woods.")))
            .collect();
        SourceBundle::new(
            "Henry David Thoreau",
            quotes,
            vec![Work::new("Walden"), Work::new("Civil Disobedience")],
            Some(Excerpt {
                work_title: "Walden".to_string(),
                text: "w".repeat(600),
            }),
        )
    }

    #[test]
    fn test_plain_prompt() {
        let prompt = PromptBuilder::new("nature")
            .participant(&thoreau(), None)
            .build();

        assert!(prompt.starts_with(
            "You are simulating a dinner party conversation between these historical figures:\n- Henry David Thoreau (1817–1862): "
        ));
        assert!(!prompt.contains("VERIFIED QUOTES"));
        assert!(prompt.contains("9. Format each speaker's turn as: **[Name]:**"));
        assert!(prompt.ends_with("open the discussion on nature."));
    }

    #[test]
    fn test_enhanced_prompt_lists_material() {
        let prompt = PromptBuilder::new("nature")
            .participant(&thoreau(), Some(bundle()))
            .build();

        assert!(prompt.contains("PARTICIPANTS AND SOURCE MATERIAL:"));
        assert!(prompt.contains("VERIFIED QUOTES from Henry David Thoreau:"));
        assert_eq!(prompt.matches("\n  • ").count(), PROMPT_QUOTES);
        assert!(prompt.contains("NOTABLE WORKS: Walden, Civil Disobedience"));
        assert!(prompt.contains(&format!("EXCERPT from \"Walden\":\n  \"{}...\"", "w".repeat(500))));
        assert!(prompt.contains("12. Format each speaker's turn as"));
    }

    #[test]
    fn test_empty_bundle_keeps_plain_variant() {
        let builder = PromptBuilder::new("nature")
            .participant(&thoreau(), Some(SourceBundle::empty("Henry David Thoreau")));
        assert!(!builder.has_material());
        assert!(!builder.build().contains("SOURCE MATERIAL"));
    }

    #[test]
    fn test_guests_without_material_still_listed() {
        let plato = Guest::custom("Plato", "428–348 BCE", "Athenian philosopher");
        let prompt = PromptBuilder::new("justice")
            .participant(&plato, None)
            .participant(&thoreau(), Some(bundle()))
            .build();

        let plato_at = prompt.find("- Plato (428–348 BCE)").unwrap();
        let thoreau_at = prompt.find("- Henry David Thoreau").unwrap();
        assert!(plato_at < thoreau_at);
        assert!(!prompt.contains("VERIFIED QUOTES from Plato"));
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("héllo", 2), ("hé", true));
        assert_eq!(clip("short", 10), ("short", false));
    }
}
