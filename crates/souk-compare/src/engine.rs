//! External comparison engine: validated, retried searches against a
//! [`MarketplaceProvider`], plus the local-vs-external comparison.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use souk_core::UnifiedListing;
use tokio::task::JoinHandle;

use crate::compare::compare;
use crate::error::SearchError;
use crate::provider::MarketplaceProvider;
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::types::{ComparisonResult, ExternalProduct};

pub struct ComparisonEngine<P> {
    provider: Arc<P>,
    retry: RetryPolicy,
}

impl<P> Clone for ComparisonEngine<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            retry: self.retry,
        }
    }
}

impl<P: MarketplaceProvider> ComparisonEngine<P> {
    /// An engine that does not retry failed searches.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Searches external platforms for `query`.
    ///
    /// Dropping the returned future abandons the search; nothing runs after.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidQuery`] if `query` is blank.
    /// - [`SearchError::Transport`] once retries are exhausted.
    pub async fn search(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<Vec<ExternalProduct>, SearchError> {
        run_search(self.provider.as_ref(), self.retry, query, category).await
    }

    /// Starts a search on the runtime and returns a handle that cancels it
    /// when dropped.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn_search(&self, query: &str, category: Option<&str>) -> PendingSearch {
        let provider = Arc::clone(&self.provider);
        let retry = self.retry;
        let query = query.to_owned();
        let category = category.map(str::to_owned);
        let handle = tokio::spawn(async move {
            run_search(provider.as_ref(), retry, &query, category.as_deref()).await
        });
        PendingSearch { handle }
    }

    /// See [`crate::compare::compare`].
    #[must_use]
    pub fn compare(
        &self,
        local: &[UnifiedListing],
        external: &[ExternalProduct],
    ) -> ComparisonResult {
        compare(local, external)
    }
}

async fn run_search<P: MarketplaceProvider>(
    provider: &P,
    retry: RetryPolicy,
    query: &str,
    category: Option<&str>,
) -> Result<Vec<ExternalProduct>, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::InvalidQuery {
            reason: "query must be non-empty".to_string(),
        });
    }

    tracing::debug!(query, category, "external search started");
    let results = retry_with_backoff(retry, || provider.search(query, category)).await?;
    tracing::info!(query, results = results.len(), "external search complete");
    Ok(results)
}

/// A search running in the background.
///
/// [`PendingSearch::cancel`] or dropping the handle aborts the task, so no
/// result is produced once the owner has gone away. Awaiting the handle
/// yields the search result.
#[derive(Debug)]
pub struct PendingSearch {
    handle: JoinHandle<Result<Vec<ExternalProduct>, SearchError>>,
}

impl PendingSearch {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the search to resolve. Equivalent to awaiting the handle.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Cancelled`] if the search was cancelled, or
    /// the search's own error.
    pub async fn wait(self) -> Result<Vec<ExternalProduct>, SearchError> {
        self.await
    }
}

impl Future for PendingSearch {
    type Output = Result<Vec<ExternalProduct>, SearchError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle).poll(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(SearchError::Cancelled),
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        })
    }
}

impl Drop for PendingSearch {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
