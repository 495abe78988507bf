//! Wiring of configuration, history store, comparison engine, and the local
//! catalog for one CLI invocation.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use souk_compare::{
    default_catalog, ComparisonEngine, ExternalProduct, MockMarketplace, RetryPolicy,
    SearchError,
};
use souk_core::{AppConfig, ErrorState, FallbackPolicy, ListingSource, UnifiedListing};
use souk_history::{FileStorage, SearchHistory};

use crate::report;

pub(crate) struct App {
    pub history: SearchHistory<FileStorage>,
    pub engine: ComparisonEngine<MockMarketplace>,
    pub listings: Vec<ListingSource>,
    pub debounce: Duration,
}

impl App {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let policy = match &config.fallback_policy_path {
            Some(path) => souk_core::load_fallback_policy(path)?,
            None => FallbackPolicy::default(),
        };
        let provider = MockMarketplace::new(default_catalog(), policy)
            .with_latency(Duration::from_millis(config.search_latency_ms));
        let engine = ComparisonEngine::new(provider).with_retry(RetryPolicy {
            max_retries: config.search_max_retries,
            backoff_base_ms: config.search_backoff_ms,
        });

        let history = SearchHistory::with_capacity(
            FileStorage::new(&config.history_path),
            config.history_capacity,
        );
        let listings = load_listings(&config.listings_path)?;
        tracing::debug!(
            env = %config.env,
            listings = listings.len(),
            history = history.len(),
            "app initialised"
        );

        Ok(Self {
            history,
            engine,
            listings,
            debounce: Duration::from_millis(config.debounce_ms),
        })
    }

    /// Records `query`, searches external platforms, and prints the
    /// comparison. Transport failures are printed as an error state.
    pub async fn search_and_report(&self, query: &str, category: Option<&str>) -> anyhow::Result<()> {
        self.history.record(query, category)?;
        let outcome = self.engine.search(query, category).await;
        self.report_outcome(query, outcome);
        Ok(())
    }

    pub fn report_outcome(&self, query: &str, outcome: Result<Vec<ExternalProduct>, SearchError>) {
        match outcome {
            Ok(external) => {
                let local = local_matches(&self.listings, query);
                let comparison = self.engine.compare(&local, &external);
                report::print_comparison(query, &local, &external, &comparison);
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "external search failed");
                report::print_error(&ErrorState::from(&err));
            }
        }
    }
}

/// Loads the local catalog. A missing file is an empty catalog.
pub(crate) fn load_listings(path: &Path) -> anyhow::Result<Vec<ListingSource>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "local listings file not found, using empty catalog");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read listings at {}", path.display()));
        }
    };
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse listings at {}", path.display()))
}

/// Unified local listings whose title contains `query`, ignoring case.
/// Records with malformed prices are logged and skipped.
pub(crate) fn local_matches(sources: &[ListingSource], query: &str) -> Vec<UnifiedListing> {
    let folded = query.trim().to_lowercase();
    sources
        .iter()
        .filter(|s| s.title().to_lowercase().contains(&folded))
        .filter_map(|s| match souk_core::unify(s.clone()) {
            Ok(listing) => Some(listing),
            Err(err) => {
                tracing::warn!(id = s.id(), error = %err, "skipping local listing");
                None
            }
        })
        .collect()
}
