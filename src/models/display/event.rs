//! Event and attendee display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Attendee, Event};
use crate::output::formatters::{format_datetime, format_price};

/// Event display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EventDisplay {
    /// Event ID
    #[tabled(rename = "ID")]
    pub id: u64,

    /// Event name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Category label
    #[tabled(rename = "CATEGORY")]
    pub category: String,

    /// Location
    #[tabled(rename = "LOCATION")]
    pub location: String,

    /// Start date/time
    #[tabled(rename = "STARTS")]
    pub starts: String,

    /// Ticket price
    #[tabled(rename = "PRICE")]
    pub price: String,

    /// Remaining/total seats
    #[tabled(rename = "SEATS")]
    pub seats: String,
}

impl From<Event> for EventDisplay {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            category: event.category,
            location: event.location,
            starts: format_datetime(event.start_date),
            price: format_price(event.price),
            seats: format!("{}/{}", event.remaining_seats, event.total_seats),
        }
    }
}

/// Attendee display model for the organizer attendee list.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AttendeeDisplay {
    /// Attendee name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Tickets bought
    #[tabled(rename = "QTY")]
    pub quantity: u32,

    /// Total paid after discounts
    #[tabled(rename = "TOTAL PAID")]
    pub total_paid: String,
}

impl From<Attendee> for AttendeeDisplay {
    fn from(attendee: Attendee) -> Self {
        Self {
            name: attendee.user_name,
            quantity: attendee.quantity,
            total_paid: format_price(attendee.total_paid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display_from_event() {
        let event = Event {
            id: 1,
            name: "Jazz Night".to_string(),
            description: String::new(),
            category: "MUSIC".to_string(),
            location: "Jakarta".to_string(),
            price: 150_000,
            start_date: "2026-05-01T18:00:00Z".parse().unwrap(),
            end_date: "2026-05-01T22:00:00Z".parse().unwrap(),
            remaining_seats: 80,
            total_seats: 100,
            image_url: None,
            organizer_id: None,
        };

        let display = EventDisplay::from(event);

        assert_eq!(display.id, 1);
        assert_eq!(display.name, "Jazz Night");
        assert_eq!(display.starts, "2026-05-01 18:00");
        assert_eq!(display.price, "150,000");
        assert_eq!(display.seats, "80/100");
    }

    #[test]
    fn test_free_event_price() {
        let attendee = Attendee {
            user_name: "Ada".to_string(),
            quantity: 2,
            total_paid: 0,
        };

        let display = AttendeeDisplay::from(attendee);
        assert_eq!(display.total_paid, "free");
    }
}
