use super::*;
use crate::storage::MemoryStorage;

fn empty_store() -> SearchHistory<MemoryStorage> {
    SearchHistory::open(MemoryStorage::new())
}

struct FailingStorage;

impl HistoryStorage for FailingStorage {
    fn load(&self) -> Result<Option<String>, HistoryError> {
        Err(std::io::Error::other("disk unplugged").into())
    }

    fn save(&self, _payload: &str) -> Result<(), HistoryError> {
        Err(std::io::Error::other("disk unplugged").into())
    }

    fn remove(&self) -> Result<(), HistoryError> {
        Err(std::io::Error::other("disk unplugged").into())
    }
}

// -----------------------------------------------------------------------
// record
// -----------------------------------------------------------------------

#[test]
fn record_prepends_newest_query() {
    let store = empty_store();
    store.record("laptop", None).unwrap();
    store.record("desk lamp", None).unwrap();
    assert_eq!(
        store.recent(10).collect::<Vec<_>>(),
        vec!["desk lamp", "laptop"]
    );
}

#[test]
fn record_trims_but_preserves_case() {
    let store = empty_store();
    let item = store.record("  Nike Air Max  ", None).unwrap();
    assert_eq!(item.query, "Nike Air Max");
}

#[test]
fn record_rejects_blank_query_without_mutation() {
    let store = empty_store();
    store.record("shoes", None).unwrap();
    let before = store.storage().payload();

    let err = store.record("   ", None).unwrap_err();
    assert!(matches!(err, HistoryError::InvalidQuery { .. }));
    assert_eq!(store.len(), 1);
    assert_eq!(store.storage().payload(), before);
}

#[test]
fn record_existing_query_moves_to_front_without_growing() {
    let store = empty_store();
    for q in ["a", "b", "c"] {
        store.record(q, None).unwrap();
    }
    store.record("a", None).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.recent(10).collect::<Vec<_>>(), vec!["a", "c", "b"]);
}

#[test]
fn record_dedup_is_case_sensitive() {
    let store = empty_store();
    store.record("Phone", None).unwrap();
    store.record("phone", None).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn record_evicts_oldest_beyond_capacity() {
    let store = empty_store();
    for i in 0..60 {
        store.record(&format!("query {i}"), None).unwrap();
    }
    assert_eq!(store.len(), DEFAULT_CAPACITY);
    let items = store.items();
    assert_eq!(items.first().unwrap().query, "query 59");
    assert_eq!(items.last().unwrap().query, "query 10");
}

#[test]
fn record_never_exceeds_capacity_or_duplicates() {
    let store = SearchHistory::with_capacity(MemoryStorage::new(), 7);
    for i in 0..500u32 {
        let q = format!("q{}", (i * 31 + i / 3) % 13);
        store.record(&q, None).unwrap();

        let items = store.items();
        assert!(items.len() <= 7);
        let unique: HashSet<_> = items.iter().map(|item| &item.query).collect();
        assert_eq!(unique.len(), items.len());
        assert_eq!(items[0].query, q);
    }
}

#[test]
fn record_timestamps_are_non_decreasing_from_tail_to_head() {
    let store = empty_store();
    for q in ["one", "two", "three"] {
        store.record(q, None).unwrap();
    }
    let items = store.items();
    assert!(items.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[test]
fn record_persists_full_list() {
    let store = empty_store();
    store.record("tv", Some("electronics")).unwrap();
    let payload = store.storage().payload().expect("slot should be written");
    let persisted: Vec<SearchHistoryItem> = serde_json::from_str(&payload).unwrap();
    assert_eq!(persisted, store.items());
}

#[test]
fn record_succeeds_when_persistence_fails() {
    let store = SearchHistory::open(FailingStorage);
    assert!(store.is_empty());
    store.record("bicycle", None).unwrap();
    assert_eq!(store.recent(1).collect::<Vec<_>>(), vec!["bicycle"]);
}

// -----------------------------------------------------------------------
// clear / recent / by_category / suggestions
// -----------------------------------------------------------------------

#[test]
fn clear_empties_memory_and_slot() {
    let store = empty_store();
    store.record("fridge", None).unwrap();
    store.clear();
    assert!(store.is_empty());
    assert!(store.storage().payload().is_none());
}

#[test]
fn recent_is_restartable() {
    let store = empty_store();
    for q in ["x", "y", "z"] {
        store.record(q, None).unwrap();
    }
    let first: Vec<_> = store.recent(2).collect();
    let second: Vec<_> = store.recent(2).collect();
    assert_eq!(first, vec!["z", "y"]);
    assert_eq!(first, second);
}

#[test]
fn recent_limit_larger_than_history_returns_all() {
    let store = empty_store();
    store.record("only", None).unwrap();
    assert_eq!(store.recent(DEFAULT_RECENT_LIMIT).count(), 1);
    assert_eq!(store.recent(0).count(), 0);
}

#[test]
fn by_category_filters_in_recency_order() {
    let store = empty_store();
    store.record("headphones", Some("electronics")).unwrap();
    store.record("sofa", Some("furniture")).unwrap();
    store.record("tablet", Some("electronics")).unwrap();
    store.record("socks", None).unwrap();
    assert_eq!(
        store.by_category("electronics"),
        vec!["tablet", "headphones"]
    );
    assert!(store.by_category("toys").is_empty());
}

#[test]
fn blank_category_is_stored_as_none() {
    let store = empty_store();
    let item = store.record("mug", Some("  ")).unwrap();
    assert!(item.category.is_none());
}

#[test]
fn suggestions_match_prefix_ignoring_case() {
    let store = empty_store();
    store.record("Laptop stand", None).unwrap();
    store.record("lamp", None).unwrap();
    store.record("laptop bag", None).unwrap();
    assert_eq!(
        store.suggestions("LAP", 10),
        vec!["laptop bag", "Laptop stand"]
    );
    assert_eq!(store.suggestions("la", 1), vec!["laptop bag"]);
    assert_eq!(store.suggestions("", 2), store.recent(2).collect::<Vec<_>>());
}

// -----------------------------------------------------------------------
// rehydration
// -----------------------------------------------------------------------

#[test]
fn open_with_corrupt_slot_yields_empty_history() {
    let store = SearchHistory::open(MemoryStorage::with_payload("{not json"));
    assert!(store.is_empty());
}

#[test]
fn open_with_wrong_shape_yields_empty_history() {
    let store = SearchHistory::open(MemoryStorage::with_payload(r#"{"query": "x"}"#));
    assert!(store.is_empty());
}

#[test]
fn open_restores_invariants_on_loaded_list() {
    let payload = r#"[
        {"query": "b", "timestamp": "2026-03-02T10:00:00Z"},
        {"query": "", "timestamp": "2026-03-02T09:30:00Z"},
        {"query": "a", "timestamp": "2026-03-02T09:00:00Z", "category": "misc"},
        {"query": "b", "timestamp": "2026-03-01T09:00:00Z"},
        {"query": "c", "timestamp": "2026-03-01T08:00:00Z"}
    ]"#;
    let store = SearchHistory::with_capacity(MemoryStorage::with_payload(payload), 2);
    let queries: Vec<_> = store.recent(10).collect();
    assert_eq!(queries, vec!["b", "a"]);
    assert_eq!(store.by_category("misc"), vec!["a"]);
}

#[test]
fn zero_capacity_is_raised_to_one() {
    let store = SearchHistory::with_capacity(MemoryStorage::new(), 0);
    store.record("a", None).unwrap();
    store.record("b", None).unwrap();
    assert_eq!(store.capacity(), 1);
    assert_eq!(store.recent(5).collect::<Vec<_>>(), vec!["b"]);
}

#[test]
fn concurrent_records_keep_invariants() {
    use std::sync::Arc;

    let store = Arc::new(SearchHistory::open(MemoryStorage::new()));
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..100 {
                    store.record(&format!("q{}", (t * 7 + i) % 75), None).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let items = store.items();
    assert_eq!(items.len(), DEFAULT_CAPACITY);
    let unique: HashSet<_> = items.iter().map(|item| &item.query).collect();
    assert_eq!(unique.len(), items.len());

    let persisted: Vec<SearchHistoryItem> =
        serde_json::from_str(&store.storage().payload().unwrap()).unwrap();
    assert_eq!(persisted, items);
}
