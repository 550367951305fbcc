//! Concurrent fetching of paginated catalog results.
//!
//! The listing endpoint reports `totalPages` on the first page; `--all`
//! pulls the rest concurrently instead of walking them one at a time.

use std::future::Future;

use futures::stream::{self, StreamExt};
use log::debug;

use crate::error::Result;

/// Maximum in-flight page requests for `--all` listings
pub const MAX_CONCURRENT_PAGES: usize = 8;

/// Fetch pages `2..=total_pages` concurrently and return their items in
/// page order.
///
/// `fetch_page` receives a 1-indexed page number. Any page failing fails the
/// whole fetch; there is no retry.
pub async fn fetch_remaining_pages<T, F, Fut>(total_pages: usize, fetch_page: F) -> Result<Vec<T>>
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    if total_pages <= 1 {
        return Ok(Vec::new());
    }

    debug!("Fetching {} remaining pages concurrently", total_pages - 1);

    let pages: Vec<Result<Vec<T>>> = stream::iter(2..=total_pages)
        .map(|page| {
            let fut = fetch_page(page);
            async move {
                let items = fut.await?;
                debug!("Page {} returned {} items", page, items.len());
                Ok(items)
            }
        })
        .buffered(MAX_CONCURRENT_PAGES)
        .collect()
        .await;

    let mut all_items = Vec::new();
    for page in pages {
        all_items.extend(page?);
    }

    Ok(all_items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_single_page_needs_no_extra_fetches() {
        let result: Result<Vec<String>> = fetch_remaining_pages(1, |_page| async {
            panic!("should not be called for a single page")
        })
        .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetches_pages_after_the_first_in_order() {
        let result: Result<Vec<String>> = fetch_remaining_pages(4, |page| async move {
            Ok(vec![format!("event-{}", page)])
        })
        .await;

        let items = result.unwrap();
        assert_eq!(items, vec!["event-2", "event-3", "event-4"]);
    }

    #[tokio::test]
    async fn test_page_failure_fails_the_fetch() {
        let result: Result<Vec<String>> = fetch_remaining_pages(3, |page| async move {
            if page == 3 {
                Err(crate::error::ApiError::ServerError(
                    "request failed with status code 500".to_string(),
                )
                .into())
            } else {
                Ok(vec![format!("event-{}", page)])
            }
        })
        .await;

        assert!(result.is_err());
    }
}
