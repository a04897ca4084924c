//! Cutting generated text into speaker turns

use regex::Regex;
use std::sync::LazyLock;
use symposium_domain::Transcript;
use tracing::debug;

/// Speaker tags, in three shapes:
///
/// - `**Plato:**` or `**[Plato]:**`
/// - `**Plato**:`
/// - `Plato:` at the start of a line, name tokens capitalized except for
///   common particles ("Leonardo da Vinci:")
static SPEAKER_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)\*\*\[?(?P<inner>[^*\n\]]+?)\]?:\*\*|\*\*\[?(?P<outer>[^*\n\]]+?)\]?\*\*:|^[ \t]*(?P<bare>[A-Z][A-Za-z.'\-]*(?:[ \t]+(?:[A-Z][A-Za-z.'\-]*|(?:al|bin|da|de|del|der|di|du|ibn|la|le|of|the|van|von)\b)){0,4})[ \t]*:",
    )
    .unwrap()
});

const QUOTE_MARKS: &[char] = &['"', '\'', '\u{201C}', '\u{201D}'];

/// Turns generated dialogue into a [`Transcript`]
///
/// Never fails: text without any speaker tag becomes a single turn
/// labelled "Conversation".
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogueSegmenter;

impl DialogueSegmenter {
    /// Create a segmenter
    pub fn new() -> Self {
        Self
    }

    /// Segment `text` into ordered speaker turns
    ///
    /// Text before the first tag is dropped. Turns whose content is empty
    /// after cleanup are discarded.
    pub fn segment(&self, text: &str) -> Transcript {
        let tags: Vec<(usize, usize, &str)> = SPEAKER_TAG
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let label = caps
                    .name("inner")
                    .or_else(|| caps.name("outer"))
                    .or_else(|| caps.name("bare"))?;
                Some((whole.start(), whole.end(), label.as_str()))
            })
            .collect();

        let pairs: Vec<(String, String)> = tags
            .iter()
            .enumerate()
            .filter_map(|(i, &(_, content_start, label))| {
                let content_end = tags.get(i + 1).map_or(text.len(), |next| next.0);
                let speaker = clean_label(label);
                let utterance = clean_utterance(&text[content_start..content_end]);
                if speaker.is_empty() || utterance.is_empty() {
                    return None;
                }
                Some((speaker.to_string(), utterance.to_string()))
            })
            .collect();

        match Transcript::from_pairs(pairs) {
            Some(transcript) => {
                debug!(
                    tags = tags.len(),
                    turns = transcript.len(),
                    "Dialogue segmented"
                );
                transcript
            }
            None => {
                debug!(tags = tags.len(), "No speaker turns found, using whole text");
                Transcript::single(text)
            }
        }
    }
}

/// Segment `text` with a default [`DialogueSegmenter`]
///
/// # Examples
///
/// ```
/// use symposium_dialogue::segment_dialogue;
///
/// let transcript = segment_dialogue("**Plato:** \"Hi\"\n\n**Socrates:** \"Hello\"");
/// assert_eq!(transcript.len(), 2);
/// assert_eq!(transcript.turns()[1].speaker_label, "Socrates");
/// assert_eq!(transcript.turns()[1].utterance, "Hello");
/// ```
pub fn segment_dialogue(text: &str) -> Transcript {
    DialogueSegmenter.segment(text)
}

fn clean_label(label: &str) -> &str {
    label.trim().trim_matches(|c: char| c == '[' || c == ']').trim()
}

/// Trim, drop one layer of wrapping quotes, then one dangling closing quote
fn clean_utterance(raw: &str) -> &str {
    let s = raw.trim();
    let s = s.strip_prefix(QUOTE_MARKS).unwrap_or(s);
    let s = s.strip_suffix(QUOTE_MARKS).unwrap_or(s);
    let s = s.trim_end();
    let s = s.strip_suffix('"').unwrap_or(s);
    s.trim()
}
