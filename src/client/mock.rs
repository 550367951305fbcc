//! Mock marketplace API client for testing
//!
//! Implements the API traits against in-memory fixtures so unit tests never
//! touch the network. Configure responses with the builder methods, then
//! inspect call counts to assert on interaction patterns (e.g. "login does
//! not trigger a second profile fetch").

use std::sync::Mutex;

use async_trait::async_trait;

use super::api::{AuthApi, CatalogApi, OrderApi, OrganizerApi};
use super::models::{
    Attendee, ChangePasswordRequest, CreateReviewRequest, CreateTransactionRequest, Event,
    EventFilters, EventPayload, LoginResponse, PaymentProofRequest, RegisterRequest, Review,
    StatsBucket, StatsParams, Transaction, UserProfile, Voucher, VoucherPayload,
};
use super::pagination::{Page, PageParams};
use crate::error::{ApiError, Error, Result};

/// Tracks API call counts for test verification
#[derive(Debug, Default, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub me: usize,
    pub list_events: usize,
    pub list_transactions: usize,
}

/// Captured register payload for asserting the register-then-login flow
#[derive(Debug, Clone)]
pub struct CapturedRegister {
    pub email: String,
    pub password: String,
}

/// Captured login credentials
#[derive(Debug, Clone)]
pub struct CapturedLogin {
    pub email: String,
    pub password: String,
}

/// Mock API client backed by in-memory fixtures.
#[derive(Default)]
pub struct MockMarketplaceClient {
    login_response: Mutex<Option<LoginResponse>>,
    profile: Mutex<Option<UserProfile>>,
    events: Mutex<Vec<Event>>,
    transactions: Mutex<Vec<Transaction>>,
    /// When set, the next `me` call fails with this message
    reject_me: Mutex<Option<String>>,
    /// When set, the next `login` call fails with this message
    reject_login: Mutex<Option<String>>,
    calls: Mutex<CallCounts>,
    captured_logins: Mutex<Vec<CapturedLogin>>,
    captured_registers: Mutex<Vec<CapturedRegister>>,
}

impl MockMarketplaceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response `login` returns.
    pub fn with_login_response(self, response: LoginResponse) -> Self {
        *self.login_response.lock().unwrap() = Some(response);
        self
    }

    /// Configure the profile `me` returns.
    pub fn with_profile(self, profile: UserProfile) -> Self {
        *self.profile.lock().unwrap() = Some(profile);
        self
    }

    /// Make every `me` call fail, simulating an expired or garbled token.
    pub fn with_rejected_me(self, message: &str) -> Self {
        *self.reject_me.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Make every `login` call fail with the given server message.
    pub fn with_rejected_login(self, message: &str) -> Self {
        *self.reject_login.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Configure the events returned by listing calls.
    pub fn with_events(self, events: Vec<Event>) -> Self {
        *self.events.lock().unwrap() = events;
        self
    }

    /// Configure the transactions returned by listing calls.
    pub fn with_transactions(self, transactions: Vec<Transaction>) -> Self {
        *self.transactions.lock().unwrap() = transactions;
        self
    }

    /// Snapshot of call counts so far.
    pub fn calls(&self) -> CallCounts {
        self.calls.lock().unwrap().clone()
    }

    /// Credentials captured across `login` calls, in order.
    pub fn captured_logins(&self) -> Vec<CapturedLogin> {
        self.captured_logins.lock().unwrap().clone()
    }

    /// Payloads captured across `register` calls, in order.
    pub fn captured_registers(&self) -> Vec<CapturedRegister> {
        self.captured_registers.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthApi for MockMarketplaceClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.calls.lock().unwrap().login += 1;
        self.captured_logins.lock().unwrap().push(CapturedLogin {
            email: email.to_string(),
            password: password.to_string(),
        });

        if let Some(message) = self.reject_login.lock().unwrap().clone() {
            return Err(ApiError::Unauthorized(message).into());
        }

        self.login_response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Other("mock login response not configured".to_string()))
    }

    async fn register(&self, payload: &RegisterRequest) -> Result<()> {
        self.calls.lock().unwrap().register += 1;
        self.captured_registers
            .lock()
            .unwrap()
            .push(CapturedRegister {
                email: payload.email.clone(),
                password: payload.password.clone(),
            });
        Ok(())
    }

    async fn me(&self, _token: &str) -> Result<UserProfile> {
        self.calls.lock().unwrap().me += 1;

        if let Some(message) = self.reject_me.lock().unwrap().clone() {
            return Err(ApiError::Unauthorized(message).into());
        }

        self.profile
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Other("mock profile not configured".to_string()))
    }

    async fn change_password(&self, _token: &str, _payload: &ChangePasswordRequest) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for MockMarketplaceClient {
    async fn list_events(
        &self,
        _filters: &EventFilters,
        _pagination: &PageParams,
    ) -> Result<Page<Event>> {
        self.calls.lock().unwrap().list_events += 1;
        let items = self.events.lock().unwrap().clone();
        let total = items.len();
        Ok(Page {
            items,
            total,
            total_pages: 1,
        })
    }

    async fn get_event(&self, event_id: u64) -> Result<Event> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == event_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Event {} not found", event_id)).into())
    }

    async fn list_reviews(&self, _event_id: u64) -> Result<Vec<Review>> {
        Ok(Vec::new())
    }

    async fn create_review(
        &self,
        _token: &str,
        _event_id: u64,
        _payload: &CreateReviewRequest,
    ) -> Result<Review> {
        Err(Error::Other("mock create_review not configured".to_string()))
    }
}

#[async_trait]
impl OrderApi for MockMarketplaceClient {
    async fn create_transaction(
        &self,
        _token: &str,
        _payload: &CreateTransactionRequest,
    ) -> Result<Transaction> {
        self.transactions
            .lock()
            .unwrap()
            .first()
            .cloned()
            .ok_or_else(|| Error::Other("mock transaction not configured".to_string()))
    }

    async fn list_transactions(&self, _token: &str) -> Result<Vec<Transaction>> {
        self.calls.lock().unwrap().list_transactions += 1;
        Ok(self.transactions.lock().unwrap().clone())
    }

    async fn list_organizer_transactions(&self, _token: &str) -> Result<Vec<Transaction>> {
        self.calls.lock().unwrap().list_transactions += 1;
        Ok(self.transactions.lock().unwrap().clone())
    }

    async fn accept_transaction(&self, _token: &str, _transaction_id: u64) -> Result<Transaction> {
        Err(Error::Other(
            "mock accept_transaction not configured".to_string(),
        ))
    }

    async fn reject_transaction(&self, _token: &str, _transaction_id: u64) -> Result<Transaction> {
        Err(Error::Other(
            "mock reject_transaction not configured".to_string(),
        ))
    }

    async fn attach_payment_proof(
        &self,
        _token: &str,
        _transaction_id: u64,
        _payload: &PaymentProofRequest,
    ) -> Result<Transaction> {
        Err(Error::Other(
            "mock attach_payment_proof not configured".to_string(),
        ))
    }
}

#[async_trait]
impl OrganizerApi for MockMarketplaceClient {
    async fn list_own_events(&self, _token: &str) -> Result<Vec<Event>> {
        Ok(self.events.lock().unwrap().clone())
    }

    async fn create_event(&self, _token: &str, _payload: &EventPayload) -> Result<Event> {
        Err(Error::Other("mock create_event not configured".to_string()))
    }

    async fn update_event(
        &self,
        _token: &str,
        _event_id: u64,
        _payload: &EventPayload,
    ) -> Result<Event> {
        Err(Error::Other("mock update_event not configured".to_string()))
    }

    async fn list_attendees(&self, _token: &str, _event_id: u64) -> Result<Vec<Attendee>> {
        Ok(Vec::new())
    }

    async fn list_vouchers(&self, _token: &str, _event_id: u64) -> Result<Vec<Voucher>> {
        Ok(Vec::new())
    }

    async fn create_voucher(
        &self,
        _token: &str,
        _event_id: u64,
        _payload: &VoucherPayload,
    ) -> Result<Voucher> {
        Err(Error::Other(
            "mock create_voucher not configured".to_string(),
        ))
    }

    async fn update_voucher(
        &self,
        _token: &str,
        _event_id: u64,
        _voucher_id: u64,
        _payload: &VoucherPayload,
    ) -> Result<Voucher> {
        Err(Error::Other(
            "mock update_voucher not configured".to_string(),
        ))
    }

    async fn delete_voucher(&self, _token: &str, _event_id: u64, _voucher_id: u64) -> Result<()> {
        Ok(())
    }

    async fn stats(&self, _token: &str, _params: &StatsParams) -> Result<Vec<StatsBucket>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::TransactionStatus;

    fn event(id: u64) -> Event {
        Event {
            id,
            name: format!("Event {}", id),
            description: String::new(),
            category: "MUSIC".to_string(),
            location: "Jakarta".to_string(),
            price: 100_000,
            start_date: "2026-05-01T18:00:00Z".parse().unwrap(),
            end_date: "2026-05-01T22:00:00Z".parse().unwrap(),
            remaining_seats: 10,
            total_seats: 100,
            image_url: None,
            organizer_id: None,
        }
    }

    #[tokio::test]
    async fn test_configured_events_are_listed_and_fetched() {
        let mock = MockMarketplaceClient::new().with_events(vec![event(1), event(2)]);

        let page = mock
            .list_events(&EventFilters::default(), &PageParams::new())
            .await
            .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 2);
        assert_eq!(mock.calls().list_events, 1);

        let fetched = mock.get_event(2).await.unwrap();
        assert_eq!(fetched.id, 2);
        assert!(mock.get_event(99).await.is_err());
    }

    #[tokio::test]
    async fn test_configured_transactions_are_listed() {
        let txn = Transaction {
            id: 10,
            event_id: 1,
            event_name: "Event 1".to_string(),
            user_name: None,
            quantity: 1,
            total_price: 100_000,
            status: TransactionStatus::Done,
            payment_deadline: None,
            payment_proof_url: None,
            created_at: "2026-05-01T10:00:00Z".parse().unwrap(),
        };
        let mock = MockMarketplaceClient::new().with_transactions(vec![txn]);

        let txns = mock.list_transactions("tok").await.unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(mock.calls().list_transactions, 1);
    }
}
