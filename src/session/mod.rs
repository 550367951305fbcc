//! Session and authentication state
//!
//! Owns the bearer token and resolved profile for the lifetime of a command
//! invocation, and the durable token key between invocations. This is the
//! only component with a real lifecycle:
//!
//! `Unauthenticated` (no token, no user) → `Resolving` (persisted token
//! found, profile fetch pending) → `Authenticated` (token + user) → back to
//! `Unauthenticated` on logout or on a failed profile refresh.
//!
//! Invariants: a non-null profile implies a non-null token; token and
//! profile commit together on login; every token change writes through to
//! the config file, and a cleared token deletes the persisted key.

use log::debug;

use crate::client::AuthApi;
use crate::client::models::{RegisterRequest, UserProfile};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No token, no user
    Unauthenticated,
    /// Persisted token present, profile not yet confirmed
    Resolving,
    /// Token and profile both present
    Authenticated,
}

/// Session manager: token + profile ownership and the transitions between
/// the session states.
///
/// Generic over the auth API so tests can drive the state machine against a
/// mock without a network.
pub struct SessionManager<C> {
    client: C,
    config: Config,
    config_path: Option<String>,
    token: Option<String>,
    user: Option<UserProfile>,
    status: SessionStatus,
}

impl<C: AuthApi> SessionManager<C> {
    /// Create a manager from persisted state.
    ///
    /// A persisted token alone is never trusted as a session: the profile
    /// must be re-fetched, so the state starts at `Resolving`, not
    /// `Authenticated`.
    pub fn new(client: C, config: Config, config_path: Option<String>) -> Self {
        let token = config.token.clone();
        let status = if token.is_some() {
            SessionStatus::Resolving
        } else {
            SessionStatus::Unauthenticated
        };

        Self {
            client,
            config,
            config_path,
            token,
            user: None,
            status,
        }
    }

    /// The API client behind this session.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Current lifecycle state.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Resolved profile, if authenticated.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Token required for an authenticated command.
    pub fn require_token(&self) -> Result<&str> {
        self.token.as_deref().ok_or(ConfigError::MissingToken.into())
    }

    /// Resolve a pending persisted token into a live session.
    ///
    /// Runs the profile refresh whenever a token is present without a
    /// profile; this is the automatic reaction to a token appearing from
    /// storage, and the path that purges a stale or garbled persisted token
    /// without any other command having to special-case it.
    pub async fn initialize(&mut self) -> Result<()> {
        if self.status == SessionStatus::Resolving {
            self.refresh_me().await?;
        }
        Ok(())
    }

    /// Exchange credentials for a session.
    ///
    /// The login response carries the token and the profile in one payload,
    /// so both commit together with no second round trip. On failure the
    /// server's message propagates and the session state is untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserProfile> {
        let response = self.client.login(email, password).await?;

        self.user = Some(response.user.clone());
        self.set_token(Some(response.access_token))?;
        self.status = SessionStatus::Authenticated;

        Ok(response.user)
    }

    /// Register a new account, then log in with the same credentials so the
    /// user lands in a live session without a separate login step.
    pub async fn register(&mut self, payload: RegisterRequest) -> Result<UserProfile> {
        let email = payload.email.clone();
        let password = payload.password.clone();

        self.client.register(&payload).await?;
        self.login(&email, &password).await
    }

    /// Re-fetch the profile behind the current token.
    ///
    /// Success replaces the stored profile. Any failure means the token no
    /// longer identifies a user (expired, revoked, garbled), so token,
    /// profile, and the persisted key are all cleared silently; that is the
    /// sole automatic-invalidation path and the expected fate of stale
    /// tokens, not an error worth a banner.
    pub async fn refresh_me(&mut self) -> Result<()> {
        let Some(token) = self.token.clone() else {
            self.status = SessionStatus::Unauthenticated;
            return Ok(());
        };

        match self.client.me(&token).await {
            Ok(profile) => {
                self.user = Some(profile);
                self.status = SessionStatus::Authenticated;
                Ok(())
            }
            Err(err) => {
                debug!("Profile refresh failed, clearing session: {}", err);
                self.clear()
            }
        }
    }

    /// Drop the session: clear token, profile, and the persisted key.
    ///
    /// Idempotent; logging out twice is a no-op.
    pub fn logout(&mut self) -> Result<()> {
        self.clear()
    }

    fn clear(&mut self) -> Result<()> {
        self.user = None;
        self.status = SessionStatus::Unauthenticated;
        self.set_token(None)
    }

    /// Write a token change through to durable storage. A `None` token
    /// deletes the persisted key rather than writing an empty value.
    fn set_token(&mut self, token: Option<String>) -> Result<()> {
        self.token = token.clone();
        self.config.token = token;
        self.config.save_at(self.config_path.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockMarketplaceClient;
    use crate::client::models::{LoginResponse, Role};

    fn profile(id: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Customer,
            referral_code: "ADA123".to_string(),
            avatar_url: None,
            points: Some(0),
        }
    }

    fn temp_config(token: Option<&str>) -> (tempfile::TempDir, Config, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let config = Config {
            token: token.map(|t| t.to_string()),
            ..Default::default()
        };
        config.save_to(path.clone()).unwrap();
        let path_str = path.to_string_lossy().to_string();
        (dir, config, path_str)
    }

    #[tokio::test]
    async fn test_persisted_token_starts_resolving_then_clears_on_rejection() {
        let (_dir, config, path) = temp_config(Some("stale-token"));
        let client = MockMarketplaceClient::new().with_rejected_me("Token expired");

        let mut session = SessionManager::new(client, config, Some(path.clone()));
        assert_eq!(session.status(), SessionStatus::Resolving);

        session.initialize().await.unwrap();

        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(session.token().is_none());
        assert!(session.user().is_none());

        // Storage wiped: the persisted key is gone.
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(!saved.contains("stale-token"));
    }

    #[tokio::test]
    async fn test_login_adopts_token_and_profile_from_one_response() {
        let (_dir, config, path) = temp_config(None);
        let client = MockMarketplaceClient::new().with_login_response(LoginResponse {
            access_token: "fresh-token".to_string(),
            user: profile("u-1"),
        });

        let mut session = SessionManager::new(client, config, Some(path.clone()));
        assert_eq!(session.status(), SessionStatus::Unauthenticated);

        let user = session.login("ada@example.com", "hunter2").await.unwrap();

        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.token(), Some("fresh-token"));
        assert_eq!(user.id, "u-1");
        assert_eq!(user.referral_code, "ADA123");

        // Profile came from the login payload; no who-am-I round trip.
        assert_eq!(session.client.calls().me, 0);

        // Token written through to storage.
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("fresh-token"));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_unchanged() {
        let (_dir, config, path) = temp_config(None);
        let client = MockMarketplaceClient::new().with_rejected_login("Invalid email or password");

        let mut session = SessionManager::new(client, config, Some(path.clone()));
        let err = session.login("ada@example.com", "wrong").await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_token_user_and_storage() {
        let (_dir, config, path) = temp_config(None);
        let client = MockMarketplaceClient::new().with_login_response(LoginResponse {
            access_token: "tok".to_string(),
            user: profile("u-1"),
        });

        let mut session = SessionManager::new(client, config, Some(path.clone()));
        session.login("ada@example.com", "hunter2").await.unwrap();
        assert_eq!(session.status(), SessionStatus::Authenticated);

        session.logout().unwrap();

        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(!saved.contains("tok"));

        // Logging out again is a no-op.
        session.logout().unwrap();
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
    }

    #[tokio::test]
    async fn test_register_logs_in_with_the_same_credentials() {
        let (_dir, config, path) = temp_config(None);
        let client = MockMarketplaceClient::new().with_login_response(LoginResponse {
            access_token: "tok".to_string(),
            user: profile("u-2"),
        });

        let mut session = SessionManager::new(client, config, Some(path));
        let payload = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            role: Role::Customer,
            referral_code: Some("FRIEND1".to_string()),
        };

        session.register(payload).await.unwrap();

        let calls = session.client.calls();
        assert_eq!(calls.register, 1);
        assert_eq!(calls.login, 1);

        let registers = session.client.captured_registers();
        let logins = session.client.captured_logins();
        assert_eq!(logins[0].email, registers[0].email);
        assert_eq!(logins[0].password, registers[0].password);
        assert_eq!(session.status(), SessionStatus::Authenticated);
    }

    #[tokio::test]
    async fn test_refresh_replaces_profile_on_success() {
        let (_dir, config, path) = temp_config(Some("valid-token"));
        let client = MockMarketplaceClient::new().with_profile(profile("u-9"));

        let mut session = SessionManager::new(client, config, Some(path));
        session.initialize().await.unwrap();

        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("u-9"));
        assert_eq!(session.token(), Some("valid-token"));
    }

    #[tokio::test]
    async fn test_require_token_when_logged_out() {
        let (_dir, config, path) = temp_config(None);
        let client = MockMarketplaceClient::new();
        let session = SessionManager::new(client, config, Some(path));

        let err = session.require_token().unwrap_err();
        assert!(err.to_string().contains("eventra login"));
    }
}
