//! Speaker turns cut from generated dialogue

/// Speaker label used when no speaker structure was found
pub const FALLBACK_SPEAKER: &str = "Conversation";

/// One speaker turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueTurn {
    /// Speaker label as written in the text
    pub speaker_label: String,

    /// What the speaker said, cleaned of wrapping quotes
    pub utterance: String,

    /// Position in the transcript, starting at 0
    pub ordinal: usize,
}

impl DialogueTurn {
    /// Split the utterance into paragraphs on blank lines
    pub fn paragraphs(&self) -> Vec<String> {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in self.utterance.lines() {
            let line = line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join("\n"));
        }

        paragraphs
    }
}

/// Ordered, never-empty sequence of speaker turns
///
/// Ordinals always run 0, 1, 2, ... in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<DialogueTurn>,
}

impl Transcript {
    /// Build a transcript from (speaker, utterance) pairs
    ///
    /// Returns `None` when there are no pairs, since a transcript can't be empty.
    pub fn from_pairs<I, S, U>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (S, U)>,
        S: Into<String>,
        U: Into<String>,
    {
        let turns: Vec<DialogueTurn> = pairs
            .into_iter()
            .enumerate()
            .map(|(ordinal, (speaker, utterance))| DialogueTurn {
                speaker_label: speaker.into(),
                utterance: utterance.into(),
                ordinal,
            })
            .collect();

        if turns.is_empty() {
            None
        } else {
            Some(Self { turns })
        }
    }

    /// A transcript holding one synthetic turn with the whole text
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            turns: vec![DialogueTurn {
                speaker_label: FALLBACK_SPEAKER.to_string(),
                utterance: text.into(),
                ordinal: 0,
            }],
        }
    }

    /// All turns in order
    pub fn turns(&self) -> &[DialogueTurn] {
        &self.turns
    }

    /// Number of turns, at least 1
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Iterate over turns
    pub fn iter(&self) -> std::slice::Iter<'_, DialogueTurn> {
        self.turns.iter()
    }

    /// Distinct speaker labels in order of first appearance
    pub fn speakers(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for turn in &self.turns {
            if !seen.contains(&turn.speaker_label.as_str()) {
                seen.push(&turn.speaker_label);
            }
        }
        seen
    }

    /// True when this is the single-turn fallback
    pub fn is_fallback(&self) -> bool {
        self.turns.len() == 1 && self.turns[0].speaker_label == FALLBACK_SPEAKER
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a DialogueTurn;
    type IntoIter = std::slice::Iter<'a, DialogueTurn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_assigns_ordinals() {
        let transcript =
            Transcript::from_pairs([("Plato", "Hi"), ("Socrates", "Hello"), ("Plato", "Well")])
                .unwrap();

        let ordinals: Vec<usize> = transcript.iter().map(|t| t.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
        assert_eq!(transcript.speakers(), vec!["Plato", "Socrates"]);
        assert!(!transcript.is_fallback());
    }

    #[test]
    fn test_from_pairs_rejects_empty() {
        let pairs: Vec<(String, String)> = Vec::new();
        assert!(Transcript::from_pairs(pairs).is_none());
    }

    #[test]
    fn test_single_fallback() {
        let transcript = Transcript::single("just text");
        assert_eq!(transcript.len(), 1);
        assert!(!transcript.is_empty());
        assert!(transcript.is_fallback());
        assert_eq!(transcript.turns()[0].speaker_label, FALLBACK_SPEAKER);
    }

    #[test]
    fn test_paragraphs() {
        let turn = DialogueTurn {
            speaker_label: "Whitman".to_string(),
            utterance: "I celebrate myself.\n\n  And sing myself.\nStill one.\n\n\n".to_string(),
            ordinal: 0,
        };
        assert_eq!(
            turn.paragraphs(),
            vec!["I celebrate myself.", "And sing myself.\nStill one."]
        );
    }
}
