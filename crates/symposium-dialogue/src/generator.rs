//! Boundary to the external conversation generation service

use crate::segmenter::segment_dialogue;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use symposium_domain::Transcript;
use thiserror::Error;
use tracing::{debug, warn};

/// Classified failure reported by a generation service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    /// The credential was rejected
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// Too many requests
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The service refused to produce content
    #[error("Content filtered: {0}")]
    ContentFiltered(String),

    /// The service could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// Anything else
    #[error("Generation error: {0}")]
    Other(String),
}

/// A service that turns a prompt into generated dialogue text
#[async_trait]
pub trait ConversationGenerator: Send + Sync {
    /// Generate text for one prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationFailure>;
}

/// Mock generator for deterministic testing
///
/// Always answers with the same text or the same failure. Clones share
/// the call counter.
///
/// # Examples
///
/// ```
/// use symposium_dialogue::{ConversationGenerator, MockGenerator};
///
/// # #[tokio::main]
/// # async fn main() {
/// let generator = MockGenerator::new("**Plato:** Hello.");
/// assert_eq!(generator.generate("any prompt").await.unwrap(), "**Plato:** Hello.");
/// assert_eq!(generator.call_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockGenerator {
    outcome: Result<String, GenerationFailure>,
    calls: Arc<AtomicUsize>,
}

impl MockGenerator {
    /// Create a generator that always returns `response`
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            outcome: Ok(response.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a generator that always fails with `failure`
    pub fn failing(failure: GenerationFailure) -> Self {
        Self {
            outcome: Err(failure),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times generate was called
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl ConversationGenerator for MockGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Generate a conversation and cut it into speaker turns
pub async fn converse<G>(generator: &G, prompt: &str) -> Result<Transcript, GenerationFailure>
where
    G: ConversationGenerator + ?Sized,
{
    let text = generator.generate(prompt).await.map_err(|failure| {
        warn!(error = %failure, "Conversation generation failed");
        failure
    })?;

    let transcript = segment_dialogue(&text);
    debug!(
        turns = transcript.len(),
        speakers = transcript.speakers().len(),
        "Conversation generated"
    );
    Ok(transcript)
}
