//! Event catalog models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marketplace event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event ID
    pub id: u64,

    /// Event name
    pub name: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Category label (e.g. MUSIC, SPORTS)
    pub category: String,

    /// City / venue location
    pub location: String,

    /// Ticket price in the smallest currency unit; zero means free
    pub price: u64,

    /// Start of the event
    pub start_date: DateTime<Utc>,

    /// End of the event
    pub end_date: DateTime<Utc>,

    /// Seats still available for sale
    pub remaining_seats: u32,

    /// Seat capacity
    pub total_seats: u32,

    /// Promotional image URL (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Owning organizer's user ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<String>,
}

impl Event {
    /// An event counts as past once its end time is behind the wall clock.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.end_date < now
    }
}

/// Query filters for the event listing endpoint
#[derive(Debug, Clone, Default)]
pub struct EventFilters {
    /// Free-text search over name/description
    pub q: Option<String>,

    /// Category filter
    pub category: Option<String>,

    /// Location filter
    pub location: Option<String>,
}

impl EventFilters {
    /// Convert to query string parameters, skipping unset filters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(ref q) = self.q {
            params.push(("q", q.clone()));
        }
        if let Some(ref category) = self.category {
            params.push(("category", category.clone()));
        }
        if let Some(ref location) = self.location {
            params.push(("location", location.clone()));
        }
        params
    }
}

/// Create/update payload for organizer event management.
///
/// `PATCH /events/{id}` sends only the fields being changed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_seats: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Attendee row from `GET /events/{id}/attendees`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// Attendee display name
    pub user_name: String,

    /// Tickets bought
    pub quantity: u32,

    /// Total paid after discounts
    pub total_paid: u64,
}
