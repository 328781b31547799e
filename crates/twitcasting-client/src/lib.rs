//! TwitCasting API v2 client library.
//!
//! Provides Basic/Bearer credential handling, a shared request
//! dispatcher with status-based response resolution, and typed
//! access to the auth, broadcasting, category, comment, gift, movie,
//! search, supporter, user and webhook endpoint groups.

pub mod api;
pub mod auth;
pub mod client;
pub mod credentials;
pub mod locator;
pub mod logger;

pub use api::models::{ApiError, ErrorResponse};
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use credentials::{AccessToken, AuthMode, Credentials};
pub use locator::ServiceLocator;
pub use logger::{Logger, NoopLogger, TracingLogger};

/// Result of a single endpoint call.
///
/// `Ok` carries the decoded success payload, [`TwitCastingError::Api`] the
/// structured error envelope, and every other variant a transport or
/// decode failure.
pub type ApiResult<T> = Result<T, TwitCastingError>;

/// Unified error type for the twitcasting-client crate.
#[derive(Debug, thiserror::Error)]
pub enum TwitCastingError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TwitCasting API error (status {status}): {error}")]
    Api { status: u16, error: ApiError },

    #[error("Bearer token required but none is configured")]
    BearerTokenMissing,

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(&'static str),

    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),
}

impl TwitCastingError {
    /// The structured `{code, message}` body, when the API itself rejected the call.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// HTTP status of an API-level error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
