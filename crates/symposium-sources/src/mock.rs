//! Mock source for testing
//!
//! Scripted per-subject responses with optional delays, for exercising
//! aggregation ordering and failure isolation without a network.

use crate::{SourceClient, SourceError, SourceKind};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
struct MockResponse<M> {
    result: Result<M, String>,
    delay: Duration,
}

/// Mock source returning scripted material
///
/// Clones share the same script and call counter.
#[derive(Debug, Clone)]
pub struct MockSource<M> {
    kind: SourceKind,
    responses: Arc<Mutex<HashMap<String, MockResponse<M>>>>,
    fetches: Arc<AtomicUsize>,
}

impl<M: Clone> MockSource<M> {
    /// Create a mock with no scripted subjects
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            responses: Arc::new(Mutex::new(HashMap::new())),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Answer `subject` with `material` immediately
    pub fn respond(&self, subject: &str, material: M) {
        self.respond_after(subject, material, Duration::ZERO);
    }

    /// Answer `subject` with `material` after `delay`
    pub fn respond_after(&self, subject: &str, material: M, delay: Duration) {
        self.script(subject, Ok(material), delay);
    }

    /// Make fetches for `subject` fail with a network error
    pub fn fail(&self, subject: &str, message: &str) {
        self.script(subject, Err(message.to_string()), Duration::ZERO);
    }

    /// Make fetches for `subject` hang for `delay`, then fail
    pub fn fail_after(&self, subject: &str, message: &str, delay: Duration) {
        self.script(subject, Err(message.to_string()), delay);
    }

    /// Number of fetches issued so far
    pub fn call_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn script(&self, subject: &str, result: Result<M, String>, delay: Duration) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(subject.to_string(), MockResponse { result, delay });
        }
    }

    fn lookup(&self, subject: &str) -> Option<MockResponse<M>> {
        self.responses.lock().ok()?.get(subject).cloned()
    }
}

#[async_trait]
impl<M> SourceClient for MockSource<M>
where
    M: Clone + Default + Send + Sync + 'static,
{
    type Page = String;
    type Material = M;

    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn try_search(&self, subject: &str) -> Result<Option<String>, SourceError> {
        Ok(self.lookup(subject).map(|_| subject.to_string()))
    }

    async fn try_fetch(&self, subject: &Self::Page) -> Result<M, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let Some(response) = self.lookup(subject) else {
            return Err(SourceError::EmptyResult(subject.clone()));
        };
        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }
        response.result.map_err(SourceError::Network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_response() {
        let source = MockSource::new(SourceKind::Bibliography);
        source.respond("Plato", vec!["Republic".to_string()]);

        assert_eq!(source.fetch_for("Plato").await, vec!["Republic".to_string()]);
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_subject_skips_fetch() {
        let source: MockSource<Vec<String>> = MockSource::new(SourceKind::Bibliography);
        assert!(source.fetch_for("Nobody").await.is_empty());
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_script() {
        let source: MockSource<Option<String>> = MockSource::new(SourceKind::Biography);
        let clone = source.clone();
        source.respond("Hypatia", Some("Hypatia was a philosopher.".to_string()));

        assert!(clone.fetch_for("Hypatia").await.is_some());
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_response() {
        let source = MockSource::new(SourceKind::FullText);
        source.respond_after("Thoreau", Some(1u8), Duration::from_secs(3));

        let started = tokio::time::Instant::now();
        assert_eq!(source.fetch_for("Thoreau").await, Some(1));
        assert!(started.elapsed() >= Duration::from_secs(3));
    }
}
