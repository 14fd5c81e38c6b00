//! Cursor-driven accumulation of paged Spotify listings.
//!
//! Spotify list endpoints return one page at a time together with an opaque
//! continuation URL. [`fetch_all`] drives that cursor to exhaustion and
//! concatenates the pages into a single ordered sequence. The page fetch
//! itself is passed in as a closure, so the walk is independent of any
//! particular endpoint (and testable without a network).

use std::future::Future;

use crate::types::Page;

/// Follows the continuation cursor of `first` until no page remains,
/// appending items in API order.
///
/// `next_page` maps a continuation URL to the next page. It is called once
/// per remaining page, so the walk terminates after O(pages) calls. Any
/// error from `next_page` propagates unrecovered; items gathered up to that
/// point are dropped.
pub async fn fetch_all<T, E, F, Fut>(first: Page<T>, mut next_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut items = first.items;
    let mut next = first.next;

    while let Some(cursor) = next {
        let page = next_page(cursor).await?;
        items.extend(page.items);
        next = page.next;
    }

    Ok(items)
}
