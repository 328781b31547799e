//! Client credentials and per-call authorization scheme selection.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use crate::TwitCastingError;

/// Application credentials as issued by the TwitCasting developer console.
#[derive(Clone, Default, Deserialize)]
pub struct AccessToken {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub bearer: Option<String>,
}

impl AccessToken {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            bearer: None,
        }
    }

    pub fn with_bearer(mut self, bearer: impl Into<String>) -> Self {
        self.bearer = Some(bearer.into());
        self
    }

    /// Read `CLIENT_ID`, `CLIENT_SECRET` and the optional `BEARER` from the environment.
    pub fn from_env() -> Result<Self, TwitCastingError> {
        let required = |key: &'static str| -> Result<String, TwitCastingError> {
            std::env::var(key)
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or(TwitCastingError::MissingEnv(key))
        };

        Ok(Self {
            client_id: required("CLIENT_ID")?,
            client_secret: required("CLIENT_SECRET")?,
            bearer: std::env::var("BEARER").ok().filter(|v| !v.is_empty()),
        })
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("bearer", &self.bearer.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Authorization scheme an endpoint call is made with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// `Basic base64(client_id:client_secret)`, i.e. app-level access.
    #[default]
    Basic,
    /// `Bearer <token>`, i.e. access on behalf of a user.
    Bearer,
}

impl AuthMode {
    pub fn from_bearer_flag(use_bearer: bool) -> Self {
        if use_bearer { Self::Bearer } else { Self::Basic }
    }
}

/// Immutable Basic/Bearer authorization values shared by every call.
#[derive(Clone)]
pub struct Credentials {
    basic: String,
    bearer: Option<String>,
}

impl Credentials {
    /// Validate the token and precompute the Basic value.
    pub fn new(token: &AccessToken) -> Result<Self, TwitCastingError> {
        if token.client_id.is_empty() {
            return Err(TwitCastingError::InvalidCredentials("client_id is empty"));
        }
        if token.client_secret.is_empty() {
            return Err(TwitCastingError::InvalidCredentials("client_secret is empty"));
        }

        let basic = STANDARD.encode(format!("{}:{}", token.client_id, token.client_secret));
        let bearer = token.bearer.clone().filter(|b| !b.is_empty());
        Ok(Self { basic, bearer })
    }

    pub fn basic_auth_value(&self) -> &str {
        &self.basic
    }

    pub fn bearer_auth_value(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    pub fn has_bearer(&self) -> bool {
        self.bearer.is_some()
    }

    /// Full `Authorization` header value for the given mode.
    pub fn authorization(&self, mode: AuthMode) -> Result<String, TwitCastingError> {
        match mode {
            AuthMode::Basic => Ok(format!("Basic {}", self.basic)),
            AuthMode::Bearer => self
                .bearer
                .as_deref()
                .map(|token| format!("Bearer {token}"))
                .ok_or(TwitCastingError::BearerTokenMissing),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("basic", &"***")
            .field("has_bearer", &self.has_bearer())
            .finish()
    }
}
