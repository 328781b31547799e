//! OAuth authorization-code flow for TwitCasting.
//!
//! Handles authorize URL generation and exchanging an authorization code
//! for a bearer token. The token endpoint takes a form body and no
//! `Authorization` header, unlike every other endpoint.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::ApiResult;
use crate::api::models::AccessTokenContainer;
use crate::api::query::Query;
use crate::client::{ApiClient, CREATED};

#[derive(Debug, Clone)]
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Build the URL the user is sent to for granting access.
    pub fn authorize_url(&self, client_id: &str, state: &str) -> String {
        let path = Query::new()
            .pair("client_id", client_id)
            .pair("response_type", "code")
            .pair("state", state)
            .to_path("/oauth2/authorize");
        format!("{}{path}", self.client.base_url())
    }

    /// Exchange an authorization code for an access token.
    pub async fn post_access_token(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
        redirect_uri: &str,
    ) -> ApiResult<AccessTokenContainer> {
        let form = [
            ("code", code),
            ("grant_type", "authorization_code"),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("redirect_uri", redirect_uri),
        ];
        let response = self
            .client
            .post_form("/oauth2/access_token", &form)
            .await?;
        self.client
            .resolve(response, CREATED, "post_access_token")
            .await
    }
}

impl AccessTokenContainer {
    /// Absolute expiry of a token issued at `issued_at`.
    ///
    /// `None` when `expires_in` does not fit in a representable timestamp.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        Duration::try_seconds(self.expires_in).and_then(|ttl| issued_at.checked_add_signed(ttl))
    }

    /// An expiry past the representable range never elapses.
    pub fn is_expired(&self, issued_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.expires_at(issued_at).is_some_and(|expires_at| now >= expires_at)
    }
}
