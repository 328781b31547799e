//! Request dispatcher shared by every endpoint group.
//!
//! Builds one fully-formed request per call (API version, `Accept`,
//! optional JSON body, Basic or Bearer authorization), sends it through the
//! owned `reqwest::Client`, and resolves the response into a success value
//! or a structured API error by status code.

mod request;
mod resolve;

use std::sync::Arc;

pub use resolve::{CREATED, OK, decode_outcome};

use crate::credentials::Credentials;
use crate::logger::Logger;

pub const DEFAULT_BASE_URL: &str = "https://apiv2.twitcasting.tv";
pub const API_VERSION: &str = "2.0";

/// TwitCasting API dispatcher. Holds no per-call state.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    logger: Arc<dyn Logger>,
}

impl ApiClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        credentials: Credentials,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            credentials,
            logger,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
