//! Error types for the Eventra CLI

use thiserror::Error;

/// Result type alias for Eventra operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors.
///
/// Rejected requests carry one human-readable string shown to the user
/// verbatim: the server's `message` field when the error body is JSON, the
/// raw body text otherwise, or `request failed with status code N` when the
/// body is empty. The variants only classify the status so callers can
/// phrase follow-up hints; nothing downstream branches on a finer taxonomy.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 - token missing, expired, or credentials rejected
    #[error("{0}")]
    Unauthorized(String),

    /// 403 - authenticated but not allowed (e.g. customer on organizer routes)
    #[error("{0}")]
    Forbidden(String),

    /// 404
    #[error("{0}")]
    NotFound(String),

    /// Any other 4xx
    #[error("{0}")]
    BadRequest(String),

    /// 5xx
    #[error("{0}")]
    ServerError(String),

    /// Request never completed or connection failed
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx with a body the caller could not interpret
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration and session-persistence errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `eventra init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Not logged in. Run `eventra login` to sign in.")]
    MissingToken,

    #[error("This command requires an organizer account.")]
    OrganizerOnly,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
