//! Checkout and transaction API trait

use async_trait::async_trait;

use crate::client::models::{CreateTransactionRequest, PaymentProofRequest, Transaction};
use crate::error::Result;

/// Transaction lifecycle operations.
///
/// All of these require a session token; the server decides whose
/// transactions a listing returns based on the account role.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Create a transaction (checkout)
    async fn create_transaction(
        &self,
        token: &str,
        payload: &CreateTransactionRequest,
    ) -> Result<Transaction>;

    /// List the caller's transactions
    async fn list_transactions(&self, token: &str) -> Result<Vec<Transaction>>;

    /// List transactions across the organizer's events
    async fn list_organizer_transactions(&self, token: &str) -> Result<Vec<Transaction>>;

    /// Accept a transaction awaiting confirmation
    async fn accept_transaction(&self, token: &str, transaction_id: u64) -> Result<Transaction>;

    /// Reject a transaction awaiting confirmation
    async fn reject_transaction(&self, token: &str, transaction_id: u64) -> Result<Transaction>;

    /// Attach an uploaded payment proof to a transaction
    async fn attach_payment_proof(
        &self,
        token: &str,
        transaction_id: u64,
        payload: &PaymentProofRequest,
    ) -> Result<Transaction>;
}
