//! End-to-end flow: debounced query → external search → comparison with
//! unified local listings.

use std::time::Duration;

use souk_compare::{ComparisonEngine, Debouncer, MockMarketplace, Platform, RetryPolicy};
use souk_core::{unify_all, ListingSource};

fn local_sources() -> Vec<ListingSource> {
    serde_json::from_str(
        r#"[
            {
                "kind": "product",
                "id": "p-100",
                "title": "Refurbished Headphones",
                "price": 32.0,
                "rating": 4.1,
                "vendor": {"id": "v-1", "name": "Gikomba Audio"}
            },
            {
                "kind": "service",
                "id": "s-200",
                "title": "Headphone Repair",
                "price": {"min": 5, "max": 15},
                "provider": {"id": "pr-1", "name": "Fix It Kevo"}
            }
        ]"#,
    )
    .unwrap()
}

#[tokio::test(start_paused = true)]
async fn debounced_query_drives_search_and_comparison() {
    let engine = ComparisonEngine::new(
        MockMarketplace::default().with_latency(Duration::from_millis(1_000)),
    )
    .with_retry(RetryPolicy {
        max_retries: 1,
        backoff_base_ms: 100,
    });

    let mut debouncer = Debouncer::new(String::new(), Duration::from_millis(300));
    let mut rx = debouncer.subscribe();
    for partial in ["h", "he", "head", "headphones"] {
        debouncer.push(partial.to_owned());
        tokio::time::advance(Duration::from_millis(50)).await;
    }
    rx.changed().await.unwrap();
    let query = rx.borrow_and_update().clone();
    assert_eq!(query, "headphones");

    let external = engine.search(&query, None).await.unwrap();
    assert!(external.iter().any(|p| p.platform == Platform::Jumia));

    let local = unify_all(
        local_sources()
            .into_iter()
            .filter(|s| s.title().to_lowercase().contains("headphone")),
    )
    .unwrap();
    assert_eq!(local.len(), 2);
    assert!(local[1].is_service);

    let result = engine.compare(&local, &external);
    assert!(!result.recommendations.is_empty());
    assert!(result.recommendations[0].starts_with("Buy local"));
}
