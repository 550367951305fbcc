//! Eventra marketplace API client implementation

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, CatalogApi, OrderApi, OrganizerApi};
use super::models::{
    Attendee, ChangePasswordRequest, CreateReviewRequest, CreateTransactionRequest, Event,
    EventFilters, EventPayload, LoginResponse, PaymentProofRequest, RegisterRequest, Review,
    SignUploadRequest, StatsBucket, StatsParams, Transaction, UploadTicket, UserProfile, Voucher,
    VoucherPayload,
};
use super::pagination::{Page, PageParams};
use crate::error::{ApiError, Result};

/// Default API origin when no override is configured
pub const DEFAULT_API_HOST: &str = "http://localhost:8000";

/// Marketplace API client.
///
/// A thin wrapper over `reqwest` that owns the request conventions every
/// endpoint shares: origin-relative paths, bearer attachment, JSON bodies,
/// cache suppression, and server-message error extraction. All business
/// rules live behind the API; this client only moves payloads.
pub struct MarketplaceClient {
    http: HttpClient,
    base_url: String,
}

impl MarketplaceClient {
    /// Create a client against the given API origin, defaulting to the
    /// local backend. No client-side timeout is set; the transport default
    /// applies.
    pub fn new(api_host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: api_host.unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
        })
    }

    /// The configured API origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Normalize a token into a bearer header value.
    ///
    /// Tolerates callers that pass an already-prefixed value: the prefix is
    /// stripped before re-adding so it appears exactly once.
    fn bearer_value(token: &str) -> String {
        let bare = token.strip_prefix("Bearer ").unwrap_or(token);
        format!("Bearer {}", bare)
    }

    /// Build a request with the shared conventions applied.
    ///
    /// Responses must always reflect current server state, so every request
    /// opts out of transport-level caching.
    fn build(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .http
            .request(method, &url)
            .header(CACHE_CONTROL, "no-store");

        if let Some(token) = token {
            req = req.header(AUTHORIZATION, Self::bearer_value(token));
        }

        req
    }

    /// Perform a request without a body and parse a JSON response.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<T> {
        let response = self
            .build(method, path, token)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::parse_json(response).await
    }

    /// Perform a request carrying a JSON body and parse a JSON response.
    ///
    /// The body is serialized and a JSON content type set; multipart payloads
    /// go through [`Self::request_multipart`] instead.
    async fn request_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T> {
        let response = self
            .build(method, path, token)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::parse_json(response).await
    }

    /// POST a multipart form to an absolute URL (the media host).
    ///
    /// The form is sent as-is; no JSON content-type header is forced over
    /// the multipart boundary the transport generates, and no bearer token
    /// is attached since the signing fields in the form authenticate it.
    pub async fn post_multipart_to<T: DeserializeOwned>(
        &self,
        url: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let response = self
            .http
            .post(url)
            .header(CACHE_CONTROL, "no-store")
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::parse_json(response).await
    }

    /// Perform a request whose 2xx body is returned as raw text.
    ///
    /// This is the success path for endpoints that do not answer with JSON;
    /// errors go through the same message extraction as everything else.
    async fn request_text(&self, method: Method, path: &str, token: Option<&str>) -> Result<String> {
        let response = self
            .build(method, path, token)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::parse_text(response).await
    }

    /// Perform a JSON-body request whose response body is irrelevant.
    ///
    /// Success is determined by the status line; the body may be JSON or
    /// plain text and is drained either way.
    async fn request_json_unit<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<()> {
        let response = self
            .build(method, path, token)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::parse_text(response).await.map(|_| ())
    }

    /// Perform a bodyless request whose response body is irrelevant.
    async fn request_unit(&self, method: Method, path: &str, token: Option<&str>) -> Result<()> {
        self.request_text(method, path, token).await.map(|_| ())
    }

    /// Parse a response into its raw body text.
    ///
    /// 2xx responses succeed regardless of content type; anything else goes
    /// through the shared error-message extraction.
    async fn parse_text(response: Response) -> Result<String> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Self::error_from(status, &text));
        }

        Ok(text)
    }

    /// Parse a response into the caller's typed expectation.
    ///
    /// 2xx with a JSON content type deserializes into `T`; callers
    /// expecting a non-JSON 2xx body use [`Self::parse_text`] instead, so a
    /// missing JSON content type here means the endpoint broke its contract.
    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Self::error_from(status, &text));
        }

        if !is_json {
            return Err(ApiError::InvalidResponse(format!(
                "Expected a JSON response from {}, got: {}",
                status,
                text.chars().take(120).collect::<String>()
            ))
            .into());
        }

        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }

    /// Extract the best human-readable message from an error body.
    ///
    /// Preference order: the `message` field of a JSON body, then the raw
    /// body text, then a generic message naming the status code.
    fn extract_message(status: StatusCode, body: &str) -> String {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }

        let trimmed = body.trim();
        if !trimmed.is_empty() {
            trimmed.to_string()
        } else {
            format!("request failed with status code {}", status.as_u16())
        }
    }

    /// Classify a rejected response by status, carrying the extracted message.
    fn error_from(status: StatusCode, body: &str) -> crate::error::Error {
        let message = Self::extract_message(status, body);

        let api = match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            s if s.is_client_error() => ApiError::BadRequest(message),
            s if s.is_server_error() => ApiError::ServerError(message),
            _ => ApiError::InvalidResponse(message),
        };

        api.into()
    }

    /// Append query parameters to a path.
    fn with_query(path: &str, params: &[(&'static str, String)]) -> String {
        if params.is_empty() {
            return path.to_string();
        }

        let query: Vec<String> = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencode(v)))
            .collect();
        format!("{}?{}", path, query.join("&"))
    }

    /// Request a signed upload ticket for a direct media-host upload.
    pub async fn sign_upload(&self, token: &str, folder: &str) -> Result<UploadTicket> {
        self.request_json(
            Method::POST,
            "/uploads/sign",
            Some(token),
            &SignUploadRequest {
                folder: folder.to_string(),
            },
        )
        .await
    }
}

/// Minimal percent-encoding for query values.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[async_trait]
impl AuthApi for MarketplaceClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        self.request_json(
            Method::POST,
            "/auth/login",
            None,
            &LoginRequest { email, password },
        )
        .await
    }

    async fn register(&self, payload: &RegisterRequest) -> Result<()> {
        self.request_json_unit(Method::POST, "/auth/register", None, payload)
            .await
    }

    async fn me(&self, token: &str) -> Result<UserProfile> {
        self.request(Method::GET, "/auth/me", Some(token)).await
    }

    async fn change_password(&self, token: &str, payload: &ChangePasswordRequest) -> Result<()> {
        self.request_json_unit(Method::PATCH, "/auth/change-password", Some(token), payload)
            .await
    }
}

#[async_trait]
impl CatalogApi for MarketplaceClient {
    async fn list_events(
        &self,
        filters: &EventFilters,
        pagination: &PageParams,
    ) -> Result<Page<Event>> {
        let mut params = filters.to_query_params();
        params.extend(pagination.to_query_params());

        let path = Self::with_query("/events", &params);
        self.request(Method::GET, &path, None).await
    }

    async fn get_event(&self, event_id: u64) -> Result<Event> {
        let path = format!("/events/{}", event_id);
        self.request(Method::GET, &path, None).await
    }

    async fn list_reviews(&self, event_id: u64) -> Result<Vec<Review>> {
        let path = format!("/events/{}/reviews", event_id);
        self.request(Method::GET, &path, None).await
    }

    async fn create_review(
        &self,
        token: &str,
        event_id: u64,
        payload: &CreateReviewRequest,
    ) -> Result<Review> {
        let path = format!("/events/{}/reviews", event_id);
        self.request_json(Method::POST, &path, Some(token), payload)
            .await
    }
}

#[async_trait]
impl OrderApi for MarketplaceClient {
    async fn create_transaction(
        &self,
        token: &str,
        payload: &CreateTransactionRequest,
    ) -> Result<Transaction> {
        self.request_json(Method::POST, "/transactions", Some(token), payload)
            .await
    }

    async fn list_transactions(&self, token: &str) -> Result<Vec<Transaction>> {
        self.request(Method::GET, "/transactions", Some(token))
            .await
    }

    async fn list_organizer_transactions(&self, token: &str) -> Result<Vec<Transaction>> {
        self.request(Method::GET, "/organizer/transactions", Some(token))
            .await
    }

    async fn accept_transaction(&self, token: &str, transaction_id: u64) -> Result<Transaction> {
        let path = format!("/transactions/{}/accept", transaction_id);
        self.request(Method::POST, &path, Some(token)).await
    }

    async fn reject_transaction(&self, token: &str, transaction_id: u64) -> Result<Transaction> {
        let path = format!("/transactions/{}/reject", transaction_id);
        self.request(Method::POST, &path, Some(token)).await
    }

    async fn attach_payment_proof(
        &self,
        token: &str,
        transaction_id: u64,
        payload: &PaymentProofRequest,
    ) -> Result<Transaction> {
        let path = format!("/transactions/{}/payment-proof", transaction_id);
        self.request_json(Method::POST, &path, Some(token), payload)
            .await
    }
}

#[async_trait]
impl OrganizerApi for MarketplaceClient {
    async fn list_own_events(&self, token: &str) -> Result<Vec<Event>> {
        self.request(Method::GET, "/organizer/events", Some(token))
            .await
    }

    async fn create_event(&self, token: &str, payload: &EventPayload) -> Result<Event> {
        self.request_json(Method::POST, "/events", Some(token), payload)
            .await
    }

    async fn update_event(
        &self,
        token: &str,
        event_id: u64,
        payload: &EventPayload,
    ) -> Result<Event> {
        let path = format!("/events/{}", event_id);
        self.request_json(Method::PATCH, &path, Some(token), payload)
            .await
    }

    async fn list_attendees(&self, token: &str, event_id: u64) -> Result<Vec<Attendee>> {
        let path = format!("/events/{}/attendees", event_id);
        self.request(Method::GET, &path, Some(token)).await
    }

    async fn list_vouchers(&self, token: &str, event_id: u64) -> Result<Vec<Voucher>> {
        let path = format!("/events/{}/vouchers", event_id);
        self.request(Method::GET, &path, Some(token)).await
    }

    async fn create_voucher(
        &self,
        token: &str,
        event_id: u64,
        payload: &VoucherPayload,
    ) -> Result<Voucher> {
        let path = format!("/events/{}/vouchers", event_id);
        self.request_json(Method::POST, &path, Some(token), payload)
            .await
    }

    async fn update_voucher(
        &self,
        token: &str,
        event_id: u64,
        voucher_id: u64,
        payload: &VoucherPayload,
    ) -> Result<Voucher> {
        let path = format!("/events/{}/vouchers/{}", event_id, voucher_id);
        self.request_json(Method::PATCH, &path, Some(token), payload)
            .await
    }

    async fn delete_voucher(&self, token: &str, event_id: u64, voucher_id: u64) -> Result<()> {
        let path = format!("/events/{}/vouchers/{}", event_id, voucher_id);
        self.request_unit(Method::DELETE, &path, Some(token)).await
    }

    async fn stats(&self, token: &str, params: &StatsParams) -> Result<Vec<StatsBucket>> {
        let path = Self::with_query("/organizer/stats", &params.to_query_params());
        self.request(Method::GET, &path, Some(token)).await
    }
}
