//! The search history store.
//!
//! Invariants held after every operation:
//! - most-recent-first ordering;
//! - at most `capacity` items (oldest evicted first);
//! - at most one item per distinct `query` (case-sensitive).
//!
//! The list lives behind a [`Mutex`] and each mutation persists while the
//! lock is held, so concurrent `record` calls cannot interleave their
//! read-modify-write and the slot always reflects the latest list.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::error::HistoryError;
use crate::storage::HistoryStorage;
use crate::types::SearchHistoryItem;

pub const DEFAULT_CAPACITY: usize = 50;
pub const DEFAULT_RECENT_LIMIT: usize = 10;

pub struct SearchHistory<S> {
    storage: S,
    capacity: usize,
    items: Mutex<Vec<SearchHistoryItem>>,
}

impl<S: HistoryStorage> SearchHistory<S> {
    /// Opens the store with [`DEFAULT_CAPACITY`], rehydrating from `storage`.
    #[must_use]
    pub fn open(storage: S) -> Self {
        Self::with_capacity(storage, DEFAULT_CAPACITY)
    }

    /// Opens the store, rehydrating from `storage`.
    ///
    /// An absent or unreadable slot yields an empty history; this never fails.
    /// A `capacity` of `0` is raised to `1`.
    #[must_use]
    pub fn with_capacity(storage: S, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let items = match load_items(&storage, capacity) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(error = %err, "discarding persisted search history");
                Vec::new()
            }
        };
        tracing::debug!(count = items.len(), capacity, "search history loaded");
        Self {
            storage,
            capacity,
            items: Mutex::new(items),
        }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records `query`, moving an existing identical query to the front.
    ///
    /// Persistence failures are logged and do not fail the call; the
    /// in-memory history is still updated.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidQuery`] if `query` is blank. The
    /// history is left untouched.
    pub fn record(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<SearchHistoryItem, HistoryError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(HistoryError::InvalidQuery {
                reason: "query must be non-empty".to_string(),
            });
        }
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_owned);

        let mut items = self.lock();

        // Keep timestamps non-decreasing even if the wall clock steps back.
        let now = Utc::now();
        let timestamp = items.first().map_or(now, |head| now.max(head.timestamp));

        let item = SearchHistoryItem {
            query: query.to_owned(),
            timestamp,
            category,
        };

        items.retain(|existing| existing.query != item.query);
        items.insert(0, item.clone());
        items.truncate(self.capacity);

        self.persist(&items);
        tracing::debug!(query = %item.query, count = items.len(), "search recorded");
        Ok(item)
    }

    /// Empties the history and removes the persisted slot.
    pub fn clear(&self) {
        let mut items = self.lock();
        items.clear();
        if let Err(err) = self.storage.remove() {
            tracing::warn!(error = %err, "failed to remove persisted search history");
        }
    }

    /// The first `limit` queries, most recent first.
    ///
    /// Each call takes a fresh snapshot, so repeated calls without an
    /// intervening mutation yield identical sequences.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = String> {
        let snapshot: Vec<SearchHistoryItem> = self.lock().iter().take(limit).cloned().collect();
        snapshot.into_iter().map(|item| item.query)
    }

    /// Every query recorded under `category`, most recent first.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|item| item.category.as_deref() == Some(category))
            .map(|item| item.query.clone())
            .collect()
    }

    /// Up to `limit` past queries starting with `prefix`, ignoring case,
    /// most recent first. An empty prefix behaves like [`Self::recent`].
    #[must_use]
    pub fn suggestions(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = prefix.trim().to_lowercase();
        self.lock()
            .iter()
            .filter(|item| item.query.to_lowercase().starts_with(&prefix))
            .take(limit)
            .map(|item| item.query.clone())
            .collect()
    }

    /// Snapshot of every item, most recent first.
    #[must_use]
    pub fn items(&self) -> Vec<SearchHistoryItem> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SearchHistoryItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, items: &[SearchHistoryItem]) {
        let result = serde_json::to_string(items)
            .map_err(HistoryError::from)
            .and_then(|payload| self.storage.save(&payload));
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to persist search history");
        }
    }
}

/// Reads the slot and restores the store invariants on whatever it holds.
fn load_items<S: HistoryStorage>(
    storage: &S,
    capacity: usize,
) -> Result<Vec<SearchHistoryItem>, HistoryError> {
    let Some(raw) = storage.load()? else {
        return Ok(Vec::new());
    };
    let parsed: Vec<SearchHistoryItem> =
        serde_json::from_str(&raw).map_err(|e| HistoryError::Corrupt {
            reason: e.to_string(),
        })?;

    let mut seen = HashSet::new();
    let mut items: Vec<SearchHistoryItem> = parsed
        .into_iter()
        .filter(|item| !item.query.trim().is_empty())
        .filter(|item| seen.insert(item.query.clone()))
        .collect();
    items.truncate(capacity);
    Ok(items)
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
