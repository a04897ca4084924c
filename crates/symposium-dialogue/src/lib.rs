//! Symposium Dialogue
//!
//! Everything on the conversation side of the pipeline: the prompt handed
//! to a generation service, the boundary to that service, and segmentation
//! of the text it returns into speaker turns.
//!
//! # Components
//!
//! - `PromptBuilder`: guests, their source material and the topic in one prompt
//! - `ConversationGenerator`: pluggable generation service, `MockGenerator` for tests
//! - `DialogueSegmenter`: generated text to a never-empty `Transcript`
//!
//! # Example Usage
//!
//! ```
//! use symposium_dialogue::{converse, MockGenerator, PromptBuilder};
//! use symposium_domain::GuestRoster;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut roster = GuestRoster::new();
//! let socrates = roster.add_custom("Socrates", "470–399 BCE", "Athenian philosopher").clone();
//! let prompt = PromptBuilder::new("virtue").participant(&socrates, None).build();
//!
//! let generator = MockGenerator::new("**[Socrates]:** \"I know that I know nothing.\"");
//! let transcript = converse(&generator, &prompt).await.unwrap();
//!
//! assert_eq!(transcript.turns()[0].speaker_label, "Socrates");
//! assert_eq!(transcript.turns()[0].utterance, "I know that I know nothing.");
//! # }
//! ```

#![warn(missing_docs)]

mod generator;
mod prompt;
mod segmenter;

pub use generator::{converse, ConversationGenerator, GenerationFailure, MockGenerator};
pub use prompt::{PromptBuilder, PROMPT_EXCERPT_CHARS, PROMPT_QUOTES};
pub use segmenter::{segment_dialogue, DialogueSegmenter};
