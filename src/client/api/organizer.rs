//! Organizer management API trait

use async_trait::async_trait;

use crate::client::models::{
    Attendee, Event, EventPayload, StatsBucket, StatsParams, Voucher, VoucherPayload,
};
use crate::error::Result;

/// Organizer-only operations: event management, vouchers, attendees, stats.
///
/// The server rejects these for customer accounts; the CLI additionally
/// gates them on the resolved profile role for a friendlier error.
#[async_trait]
pub trait OrganizerApi: Send + Sync {
    /// List the organizer's own events
    async fn list_own_events(&self, token: &str) -> Result<Vec<Event>>;

    /// Create an event
    async fn create_event(&self, token: &str, payload: &EventPayload) -> Result<Event>;

    /// Update an event
    async fn update_event(&self, token: &str, event_id: u64, payload: &EventPayload)
    -> Result<Event>;

    /// List attendees for an event
    async fn list_attendees(&self, token: &str, event_id: u64) -> Result<Vec<Attendee>>;

    /// List vouchers for an event
    async fn list_vouchers(&self, token: &str, event_id: u64) -> Result<Vec<Voucher>>;

    /// Create a voucher for an event
    async fn create_voucher(
        &self,
        token: &str,
        event_id: u64,
        payload: &VoucherPayload,
    ) -> Result<Voucher>;

    /// Update a voucher
    async fn update_voucher(
        &self,
        token: &str,
        event_id: u64,
        voucher_id: u64,
        payload: &VoucherPayload,
    ) -> Result<Voucher>;

    /// Delete a voucher
    async fn delete_voucher(&self, token: &str, event_id: u64, voucher_id: u64) -> Result<()>;

    /// Fetch sales statistics buckets
    async fn stats(&self, token: &str, params: &StatsParams) -> Result<Vec<StatsBucket>>;
}
