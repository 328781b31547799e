//! Construction entry point wiring one dispatcher into every endpoint group.

use std::sync::Arc;

use crate::api::{
    BroadcastingService, CategoryService, CommentService, GiftService, MovieService,
    SearchService, SupporterService, UserService, WebhookService,
};
use crate::auth::AuthService;
use crate::client::{ApiClient, DEFAULT_BASE_URL};
use crate::credentials::{AccessToken, Credentials};
use crate::logger::Logger;
use crate::TwitCastingError;

/// One handle per resource group, all sharing a single [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ServiceLocator {
    pub auth: AuthService,
    pub broadcasting: BroadcastingService,
    pub category: CategoryService,
    pub comment: CommentService,
    pub gift: GiftService,
    pub movie: MovieService,
    pub search: SearchService,
    pub supporter: SupporterService,
    pub user: UserService,
    pub webhook: WebhookService,
    client: Arc<ApiClient>,
}

impl ServiceLocator {
    /// Build against the production API.
    pub fn new(
        http: reqwest::Client,
        logger: Arc<dyn Logger>,
        access_token: &AccessToken,
    ) -> Result<Self, TwitCastingError> {
        Self::with_base_url(http, logger, access_token, DEFAULT_BASE_URL)
    }

    /// Build against an arbitrary base URL, e.g. a local test server.
    pub fn with_base_url(
        http: reqwest::Client,
        logger: Arc<dyn Logger>,
        access_token: &AccessToken,
        base_url: impl Into<String>,
    ) -> Result<Self, TwitCastingError> {
        let credentials = Credentials::new(access_token)?;
        let client = Arc::new(ApiClient::new(http, base_url, credentials, logger));
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Arc<ApiClient>) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            broadcasting: BroadcastingService::new(client.clone()),
            category: CategoryService::new(client.clone()),
            comment: CommentService::new(client.clone()),
            gift: GiftService::new(client.clone()),
            movie: MovieService::new(client.clone()),
            search: SearchService::new(client.clone()),
            supporter: SupporterService::new(client.clone()),
            user: UserService::new(client.clone()),
            webhook: WebhookService::new(client.clone()),
            client,
        }
    }

    /// The dispatcher shared by every group.
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }
}
