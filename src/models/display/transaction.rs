//! Transaction display model

use chrono::Utc;
use serde::Serialize;
use tabled::Tabled;

use super::common::EMPTY_CELL;
use crate::client::models::{Transaction, TransactionStatus};
use crate::output::formatters::{format_countdown, format_price};

/// Transaction display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TransactionDisplay {
    /// Transaction ID
    #[tabled(rename = "ID")]
    pub id: u64,

    /// Event name
    #[tabled(rename = "EVENT")]
    pub event: String,

    /// Buyer name, when the listing includes it
    #[tabled(rename = "BUYER")]
    pub buyer: String,

    /// Tickets bought
    #[tabled(rename = "QTY")]
    pub quantity: u32,

    /// Final price
    #[tabled(rename = "TOTAL")]
    pub total: String,

    /// Lifecycle status
    #[tabled(rename = "STATUS")]
    pub status: String,

    /// Countdown to the payment deadline, for transactions awaiting payment
    #[tabled(rename = "PAYMENT DUE")]
    pub payment_due: String,
}

impl From<Transaction> for TransactionDisplay {
    fn from(txn: Transaction) -> Self {
        // Deadline countdown is recomputed from the wall clock at render
        // time; only unpaid transactions show one.
        let payment_due = match (&txn.status, txn.payment_deadline) {
            (TransactionStatus::WaitingForPayment, Some(deadline)) => {
                format_countdown(deadline, Utc::now())
            }
            _ => EMPTY_CELL.to_string(),
        };

        Self {
            id: txn.id,
            event: txn.event_name,
            buyer: txn.user_name.unwrap_or_else(|| EMPTY_CELL.to_string()),
            quantity: txn.quantity,
            total: format_price(txn.total_price),
            status: txn.status.to_string(),
            payment_due,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn txn(status: TransactionStatus) -> Transaction {
        Transaction {
            id: 10,
            event_id: 1,
            event_name: "Jazz Night".to_string(),
            user_name: None,
            quantity: 2,
            total_price: 300_000,
            status,
            payment_deadline: None,
            payment_proof_url: None,
            created_at: "2026-05-01T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_display_without_deadline() {
        let display = TransactionDisplay::from(txn(TransactionStatus::Done));
        assert_eq!(display.status, "DONE");
        assert_eq!(display.payment_due, EMPTY_CELL);
        assert_eq!(display.buyer, EMPTY_CELL);
        assert_eq!(display.total, "300,000");
    }

    #[test]
    fn test_unpaid_transaction_shows_countdown() {
        let mut t = txn(TransactionStatus::WaitingForPayment);
        t.payment_deadline = Some(Utc::now() + Duration::hours(2));

        let display = TransactionDisplay::from(t);
        assert_ne!(display.payment_due, EMPTY_CELL);
        assert_ne!(display.payment_due, "expired");
    }

    #[test]
    fn test_confirmed_transaction_hides_stale_deadline() {
        let mut t = txn(TransactionStatus::WaitingForAdminConfirmation);
        t.payment_deadline = Some(Utc::now() + Duration::hours(2));

        let display = TransactionDisplay::from(t);
        assert_eq!(display.payment_due, EMPTY_CELL);
    }
}
