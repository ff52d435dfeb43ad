//! Asynchronous specialist source
//!
//! The prototype faked its fetch with a bare timer and a catch block that
//! could never fire. Here the boundary is real: a source trait returning a
//! future, a mock implementation with a simulated network delay, a failure
//! mode that actually exercises the error path, and a cancellation token so
//! an abandoned load resolves to `Cancelled` instead of landing late.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::catalog::mock;
use crate::catalog::specialist::Specialist;

/// Default simulated network delay
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Errors from fetching the specialist list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("fetch cancelled")]
    Cancelled,

    #[error("upstream error: {0}")]
    Upstream(String),
}

/// A source of specialist records
#[async_trait]
pub trait SpecialistSource: Send + Sync {
    /// Fetch the full list, or resolve early if the token fires
    async fn fetch(&self, cancel: &CancellationToken) -> Result<Vec<Specialist>, FetchError>;
}

/// Mock source: the hardcoded list behind a simulated delay
#[derive(Debug, Clone)]
pub struct MockSource {
    latency: Duration,
    jitter: bool,
    failure: Option<String>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            jitter: true,
            failure: None,
        }
    }
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the simulated delay (disables jitter for determinism)
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            jitter: false,
            failure: None,
        }
    }

    /// A source that fails with the given upstream message after the delay
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            latency: Duration::ZERO,
            jitter: false,
            failure: Some(message.into()),
        }
    }

    fn delay(&self) -> Duration {
        if !self.jitter || self.latency.is_zero() {
            return self.latency;
        }
        // Up to 10% extra, so repeated loads don't feel robotic
        let extra = rand::rng().random_range(0..=self.latency.as_millis() as u64 / 10);
        self.latency + Duration::from_millis(extra)
    }
}

#[async_trait]
impl SpecialistSource for MockSource {
    async fn fetch(&self, cancel: &CancellationToken) -> Result<Vec<Specialist>, FetchError> {
        tokio::select! {
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            _ = tokio::time::sleep(self.delay()) => match &self.failure {
                Some(message) => Err(FetchError::Upstream(message.clone())),
                None => Ok(mock::specialists()),
            },
        }
    }
}

/// Tri-state of a catalog load
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready(Vec<Specialist>),
    Failed(FetchError),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The fetched list, if the load succeeded
    pub fn specialists(&self) -> Option<&[Specialist]> {
        match self {
            FetchState::Ready(list) => Some(list),
            _ => None,
        }
    }

    /// The failure, if the load failed
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Drives one source call per "mount" and tracks its tri-state
#[derive(Debug)]
pub struct CatalogLoader {
    state: FetchState,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogLoader {
    /// A fresh loader starts in the loading state
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Run one load: Loading, then exactly one of Ready or Failed
    ///
    /// Re-loading re-runs the full simulated delay, as a remount did in the
    /// prototype.
    pub async fn load<S: SpecialistSource>(
        &mut self,
        source: &S,
        cancel: &CancellationToken,
    ) -> &FetchState {
        self.state = FetchState::Loading;
        self.state = match source.fetch(cancel).await {
            Ok(list) => FetchState::Ready(list),
            Err(err) => FetchState::Failed(err),
        };
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> CancellationToken {
        CancellationToken::new()
    }

    #[tokio::test]
    async fn test_loader_transitions_loading_to_ready_once() {
        let source = MockSource::with_latency(Duration::from_millis(10));
        let mut loader = CatalogLoader::new();
        assert!(loader.state().is_loading());

        loader.load(&source, &token()).await;

        assert!(!loader.state().is_loading());
        let list = loader.state().specialists().unwrap();
        assert_eq!(list.len(), 6);
        assert!(loader.state().error().is_none());
    }

    #[tokio::test]
    async fn test_failing_source_reaches_failed_state() {
        let source = MockSource::failing("catalog service unavailable");
        let mut loader = CatalogLoader::new();

        loader.load(&source, &token()).await;

        assert!(loader.state().specialists().is_none());
        assert_eq!(
            loader.state().error(),
            Some(&FetchError::Upstream(
                "catalog service unavailable".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_cancelled_before_delay_elapses() {
        let source = MockSource::with_latency(Duration::from_secs(60));
        let cancel = token();
        cancel.cancel();

        let mut loader = CatalogLoader::new();
        loader.load(&source, &cancel).await;

        assert_eq!(loader.state().error(), Some(&FetchError::Cancelled));
    }

    #[tokio::test]
    async fn test_reload_runs_full_delay_again() {
        let source = MockSource::with_latency(Duration::from_millis(5));
        let mut loader = CatalogLoader::new();

        loader.load(&source, &token()).await;
        assert!(loader.state().specialists().is_some());

        // Second load passes through Loading again and succeeds
        let state = loader.load(&source, &token()).await;
        assert!(state.specialists().is_some());
    }

    #[tokio::test]
    async fn test_zero_latency_fetch() {
        let source = MockSource::with_latency(Duration::ZERO);
        let list = source.fetch(&token()).await.unwrap();
        assert_eq!(list.len(), 6);
    }
}
