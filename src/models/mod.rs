//! Display models for CLI output
//!
//! Conversions from API response types into table/JSON-friendly rows.

pub mod display;

pub use display::{
    AttendeeDisplay, EventDisplay, ReviewDisplay, StatsDisplay, TransactionDisplay, VoucherDisplay,
};
