//! Eventra API data models
//!
//! Domain types mirrored from marketplace API responses, organized by
//! resource. These are pure DTOs: rebuilt on every fetch, never persisted.

mod event;
mod review;
mod stats;
mod transaction;
mod upload;
mod user;
mod voucher;

pub use event::{Attendee, Event, EventFilters, EventPayload};
pub use review::{CreateReviewRequest, Review};
pub use stats::{StatsBucket, StatsGranularity, StatsParams};
pub use transaction::{
    CreateTransactionRequest, PaymentProofRequest, Transaction, TransactionStatus,
};
pub use upload::{SignUploadRequest, UploadTicket, UploadedAsset};
pub use user::{ChangePasswordRequest, LoginResponse, RegisterRequest, Role, UserProfile};
pub use voucher::{Voucher, VoucherPayload};
