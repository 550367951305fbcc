//! Account and session API trait

use async_trait::async_trait;

use crate::client::models::{ChangePasswordRequest, LoginResponse, RegisterRequest, UserProfile};
use crate::error::Result;

/// Account operations for the marketplace API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token plus profile payload
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse>;

    /// Register a new account; the caller logs in afterwards
    async fn register(&self, payload: &RegisterRequest) -> Result<()>;

    /// Resolve the profile behind the given token ("who am I")
    async fn me(&self, token: &str) -> Result<UserProfile>;

    /// Change the account password
    async fn change_password(&self, token: &str, payload: &ChangePasswordRequest) -> Result<()>;
}
