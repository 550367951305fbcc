//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, session resolution, and client initialization.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::MarketplaceClient;
use crate::client::models::{Role, UserProfile};
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::session::SessionManager;

/// Context for command execution containing config, session, and runtime
/// options.
///
/// The session manager owns the API client; handlers reach it through
/// [`CommandContext::client`].
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists yet)
    pub config: Config,
    /// Session state over the marketplace client
    pub session: SessionManager<MarketplaceClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a command context.
    ///
    /// Loads the config (falling back to defaults when the file does not
    /// exist, so public browsing works before `eventra init`), resolves the
    /// API origin with flag/env taking precedence over the config file, and
    /// seeds the session from the persisted token without resolving it yet.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;

        let api_host = opts
            .api_host_ref()
            .map(|h| h.to_string())
            .or_else(|| config.api_host.clone());
        let client = MarketplaceClient::new(api_host)?;
        debug!("Using API origin {}", client.base_url());

        let session = SessionManager::new(client, config.clone(), opts.config.clone());

        Ok(Self {
            config,
            session,
            format: opts.format,
        })
    }

    /// Create a context and resolve the session for an authenticated command.
    ///
    /// A persisted token is re-validated by fetching the profile; a token
    /// the backend rejects is purged silently and the command fails with the
    /// not-logged-in hint instead of a raw HTTP error.
    pub async fn authenticated(opts: &GlobalOptions) -> Result<Self> {
        let mut ctx = Self::new(opts)?;
        ctx.session.initialize().await?;
        debug!("Session resolved to {:?}", ctx.session.status());
        ctx.session.require_token()?;
        Ok(ctx)
    }

    /// The API client backing the session.
    pub fn client(&self) -> &MarketplaceClient {
        self.session.client()
    }

    /// The resolved session token, required.
    pub fn token(&self) -> Result<&str> {
        self.session.require_token()
    }

    /// The resolved profile, required.
    pub fn user(&self) -> Result<&UserProfile> {
        self.session
            .user()
            .ok_or_else(|| ConfigError::MissingToken.into())
    }

    /// Gate a command on an organizer account.
    pub fn require_organizer(&self) -> Result<&UserProfile> {
        let user = self.user()?;
        if user.role != Role::Organizer {
            return Err(ConfigError::OrganizerOnly.into());
        }
        Ok(user)
    }
}
