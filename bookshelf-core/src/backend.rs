//! The service boundary each mutating command runs against

use crate::config::LatencyConfig;
use crate::error::BackendError;
use crate::types::{Book, BookDraft, BookId};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Result type for backend calls
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Asynchronous catalog service.
///
/// Every call completes after an unspecified latency and may fail. The store
/// only mutates its collection once the matching call has succeeded.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Accept a new book; the store assigns its id once this succeeds
    async fn create(&self, draft: &BookDraft) -> BackendResult<()>;

    /// Accept a full replacement of a book
    async fn update(&self, book: &Book) -> BackendResult<()>;

    /// Accept the removal of a book
    async fn delete(&self, id: &BookId) -> BackendResult<()>;
}

/// Backend that only waits, standing in for a remote service
pub struct SimulatedBackend {
    latency: LatencyConfig,
    failure: Mutex<Option<String>>,
}

impl SimulatedBackend {
    pub fn new(latency: LatencyConfig) -> Self {
        Self {
            latency,
            failure: Mutex::new(None),
        }
    }

    /// Backend that answers immediately
    pub fn instant() -> Self {
        Self::new(LatencyConfig::instant())
    }

    /// Make every following call fail with `message` until [`Self::recover`]
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.into());
    }

    /// Stop injecting failures
    pub fn recover(&self) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn latency(&self) -> LatencyConfig {
        self.latency
    }

    async fn call(&self, delay: Duration) -> BackendResult<()> {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let failure = self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match failure {
            Some(message) => Err(BackendError::Failed(message)),
            None => Ok(()),
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

#[async_trait]
impl CatalogBackend for SimulatedBackend {
    async fn create(&self, _draft: &BookDraft) -> BackendResult<()> {
        self.call(self.latency.create).await
    }

    async fn update(&self, _book: &Book) -> BackendResult<()> {
        self.call(self.latency.update).await
    }

    async fn delete(&self, _id: &BookId) -> BackendResult<()> {
        self.call(self.latency.delete).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sample_books;

    #[tokio::test]
    async fn test_instant_backend_succeeds() {
        let backend = SimulatedBackend::instant();
        let books = sample_books();
        let book = &books[0];
        assert!(backend.create(&book.to_draft()).await.is_ok());
        assert!(backend.update(book).await.is_ok());
        assert!(backend.delete(&book.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let backend = SimulatedBackend::instant();
        backend.fail_with("service unavailable");
        assert_eq!(
            backend.delete(&BookId::new("1")).await,
            Err(BackendError::Failed("service unavailable".to_string()))
        );

        backend.recover();
        assert!(backend.delete(&BookId::new("1")).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_respected() {
        let backend = SimulatedBackend::default();
        let start = tokio::time::Instant::now();
        backend.delete(&BookId::new("1")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
