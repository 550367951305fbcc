//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

pub mod common;
mod event;
mod review;
mod stats;
mod transaction;
mod voucher;

pub use event::{AttendeeDisplay, EventDisplay};
pub use review::ReviewDisplay;
pub use stats::StatsDisplay;
pub use transaction::TransactionDisplay;
pub use voucher::VoucherDisplay;
