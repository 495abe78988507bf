//! The contract every external marketplace adapter satisfies, and the mock
//! adapter used until live integrations exist.

use std::future::Future;
use std::time::Duration;

use souk_core::FallbackPolicy;

use crate::catalog::default_catalog;
use crate::error::SearchError;
use crate::types::ExternalProduct;

/// Source of external listings for a query.
///
/// Implementations receive an already validated, trimmed, non-empty query.
/// A failed round trip is reported as [`SearchError::Transport`].
pub trait MarketplaceProvider: Send + Sync + 'static {
    fn search(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> impl Future<Output = Result<Vec<ExternalProduct>, SearchError>> + Send;
}

/// Serves a fixed catalog after a configurable simulated latency.
#[derive(Debug, Clone)]
pub struct MockMarketplace {
    catalog: Vec<ExternalProduct>,
    policy: FallbackPolicy,
    latency: Duration,
}

impl Default for MockMarketplace {
    fn default() -> Self {
        Self::new(default_catalog(), FallbackPolicy::default())
    }
}

impl MockMarketplace {
    /// A provider with zero latency.
    #[must_use]
    pub fn new(catalog: Vec<ExternalProduct>, policy: FallbackPolicy) -> Self {
        Self {
            catalog,
            policy,
            latency: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl MarketplaceProvider for MockMarketplace {
    async fn search(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<Vec<ExternalProduct>, SearchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(match_catalog(&self.catalog, &self.policy, query, category))
    }
}

/// Selects catalog items for `query`.
///
/// 1. Items whose title contains the case-folded query, or the case-folded
///    `category` when one is given.
/// 2. Otherwise the items tagged with the first fallback rule whose keywords
///    occur in the query.
/// 3. Otherwise the first `policy.prefix_len` items.
///
/// Catalog order is preserved throughout.
#[must_use]
pub fn match_catalog(
    catalog: &[ExternalProduct],
    policy: &FallbackPolicy,
    query: &str,
    category: Option<&str>,
) -> Vec<ExternalProduct> {
    let folded = query.to_lowercase();
    let folded_category = category
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty());

    let direct: Vec<ExternalProduct> = catalog
        .iter()
        .filter(|item| {
            let title = item.title.to_lowercase();
            title.contains(&folded)
                || folded_category
                    .as_deref()
                    .is_some_and(|c| title.contains(c))
        })
        .cloned()
        .collect();
    if !direct.is_empty() {
        return direct;
    }

    if let Some(rule) = policy.rule_for(&folded) {
        let tagged: Vec<ExternalProduct> = catalog
            .iter()
            .filter(|item| item.category.eq_ignore_ascii_case(&rule.category))
            .cloned()
            .collect();
        if !tagged.is_empty() {
            tracing::debug!(query, rule = %rule.category, "no direct match, using category fallback");
            return tagged;
        }
    }

    tracing::debug!(query, prefix_len = policy.prefix_len, "no direct match, using catalog prefix");
    catalog.iter().take(policy.prefix_len).cloned().collect()
}
