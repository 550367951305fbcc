//! Transaction models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a ticket transaction.
///
/// Unknown future statuses deserialize into `Other` rather than failing the
/// whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[serde(rename = "WAITING_FOR_PAYMENT")]
    WaitingForPayment,

    #[serde(rename = "WAITING_FOR_ADMIN_CONFIRMATION")]
    WaitingForAdminConfirmation,

    #[serde(rename = "DONE")]
    Done,

    #[serde(rename = "REJECTED")]
    Rejected,

    #[serde(rename = "EXPIRED")]
    Expired,

    #[serde(rename = "CANCELED")]
    Canceled,

    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::WaitingForPayment => write!(f, "WAITING_FOR_PAYMENT"),
            TransactionStatus::WaitingForAdminConfirmation => {
                write!(f, "WAITING_FOR_ADMIN_CONFIRMATION")
            }
            TransactionStatus::Done => write!(f, "DONE"),
            TransactionStatus::Rejected => write!(f, "REJECTED"),
            TransactionStatus::Expired => write!(f, "EXPIRED"),
            TransactionStatus::Canceled => write!(f, "CANCELED"),
            TransactionStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Ticket purchase transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction ID
    pub id: u64,

    /// Purchased event's ID
    pub event_id: u64,

    /// Purchased event's name
    pub event_name: String,

    /// Buyer display name (present in organizer listings)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Tickets bought
    pub quantity: u32,

    /// Final price after voucher/coupon/points discounts
    pub total_price: u64,

    /// Current status
    pub status: TransactionStatus,

    /// Server-supplied payment deadline, set while awaiting payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_deadline: Option<DateTime<Utc>>,

    /// Uploaded payment-proof image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_proof_url: Option<String>,

    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Checkout request for `POST /transactions`.
///
/// Discount fields are optional; the server computes the final price and
/// enforces stacking rules.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Event being purchased
    pub event_id: u64,

    /// Tickets requested
    pub quantity: u32,

    /// Event-scoped voucher code (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_code: Option<String>,

    /// User-scoped coupon code (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,

    /// Referral points to spend (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_used: Option<u64>,
}

/// Payment-proof attachment for `POST /transactions/{id}/payment-proof`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProofRequest {
    /// Public URL of the uploaded proof image
    pub image_url: String,
}
