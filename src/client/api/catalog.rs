//! Public event catalog API trait

use async_trait::async_trait;

use crate::client::models::{CreateReviewRequest, Event, EventFilters, Review};
use crate::client::pagination::{Page, PageParams};
use crate::error::Result;

/// Public catalog operations: browsing events and reviews.
///
/// Browsing needs no session token; submitting a review does.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List events matching the given filters, one page at a time
    async fn list_events(
        &self,
        filters: &EventFilters,
        pagination: &PageParams,
    ) -> Result<Page<Event>>;

    /// Fetch a single event by ID
    async fn get_event(&self, event_id: u64) -> Result<Event>;

    /// List reviews for an event
    async fn list_reviews(&self, event_id: u64) -> Result<Vec<Review>>;

    /// Submit a review for an attended event
    async fn create_review(
        &self,
        token: &str,
        event_id: u64,
        payload: &CreateReviewRequest,
    ) -> Result<Review>;
}
