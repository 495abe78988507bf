//! Rehydration of the search history across process restarts, using a
//! real file slot in a temp directory.

use souk_history::{FileStorage, SearchHistory};

#[test]
fn history_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search_history.json");

    {
        let store = SearchHistory::open(FileStorage::new(&path));
        store.record("headphones", Some("electronics")).unwrap();
        store.record("office chair", Some("furniture")).unwrap();
        store.record("headphones", Some("electronics")).unwrap();
    }

    let reopened = SearchHistory::open(FileStorage::new(&path));
    assert_eq!(
        reopened.recent(10).collect::<Vec<_>>(),
        vec!["headphones", "office chair"]
    );
    assert_eq!(reopened.by_category("furniture"), vec!["office chair"]);
}

#[test]
fn clear_removes_file_and_reopen_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search_history.json");

    let store = SearchHistory::open(FileStorage::new(&path));
    store.record("rice cooker", None).unwrap();
    assert!(path.exists());

    store.clear();
    assert!(!path.exists());
    assert!(SearchHistory::open(FileStorage::new(&path)).is_empty());
}

#[test]
fn corrupt_file_is_treated_as_empty_and_then_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search_history.json");
    std::fs::write(&path, "\u{0}\u{1}garbage").unwrap();

    let store = SearchHistory::open(FileStorage::new(&path));
    assert!(store.is_empty());

    store.record("blender", None).unwrap();
    let reopened = SearchHistory::open(FileStorage::new(&path));
    assert_eq!(reopened.recent(10).collect::<Vec<_>>(), vec!["blender"]);
}
