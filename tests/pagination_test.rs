use std::sync::atomic::{AtomicUsize, Ordering};

use shortlist::pagination::fetch_all;
use shortlist::types::Page;

// Helper function to create a test page
fn page<T>(items: Vec<T>, next: Option<&str>) -> Page<T> {
    Page {
        items,
        next: next.map(|n| n.to_string()),
        total: None,
    }
}

#[tokio::test]
async fn test_single_page_makes_no_fetch() {
    let calls = AtomicUsize::new(0);

    let items = fetch_all(page(vec![1, 2, 3], None), |_cursor| {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Ok::<_, String>(page(vec![], None)) }
    })
    .await
    .unwrap();

    // A page without a cursor is already complete
    assert_eq!(items, vec![1, 2, 3]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_all_pages_concatenated_in_order() {
    let first = page(vec![1, 2, 3], Some("p2"));

    let items = fetch_all(first, |cursor| async move {
        match cursor.as_str() {
            "p2" => Ok(page(vec![4, 5], Some("p3"))),
            "p3" => Ok(page(vec![6, 7, 8, 9], None)),
            other => Err(format!("unexpected cursor {}", other)),
        }
    })
    .await
    .unwrap();

    // Page sizes [3, 2, 4] -> 9 items, no duplicates, cross-page order kept
    assert_eq!(items, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[tokio::test]
async fn test_fetch_count_matches_page_count() {
    let calls = AtomicUsize::new(0);
    let first = page(vec!["a"], Some("p2"));

    let items = fetch_all(first, |cursor| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move {
            match cursor.as_str() {
                "p2" => Ok::<_, String>(page(vec!["b"], Some("p3"))),
                _ => Ok(page(vec!["c"], None)),
            }
        }
    })
    .await
    .unwrap();

    // One external call per continuation page, no more
    assert_eq!(items.len(), 3);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_empty_pages_are_skipped_not_fatal() {
    let first = page(vec![1], Some("empty"));

    let items = fetch_all(first, |cursor| async move {
        match cursor.as_str() {
            "empty" => Ok::<_, String>(page(vec![], Some("tail"))),
            _ => Ok(page(vec![2], None)),
        }
    })
    .await
    .unwrap();

    // An empty intermediate page just contributes nothing
    assert_eq!(items, vec![1, 2]);
}

#[tokio::test]
async fn test_error_propagates_unrecovered() {
    let first = page(vec![1, 2], Some("boom"));

    let result = fetch_all(first, |_cursor| async {
        Err::<Page<i32>, String>("upstream failure".to_string())
    })
    .await;

    // A failing page fetch aborts the whole walk
    assert_eq!(result, Err("upstream failure".to_string()));
}
