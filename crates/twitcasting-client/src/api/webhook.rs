use serde::Serialize;

use super::*;

#[derive(Serialize)]
struct RegisterWebhookBody<'a> {
    user_id: &'a str,
    events: &'a [String],
}

/// Webhook management. Basic only; the app's own credentials own the hooks.
#[derive(Debug, Clone)]
pub struct WebhookService {
    client: Arc<ApiClient>,
}

impl WebhookService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List webhooks registered by this application.
    pub async fn get_webhook_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> ApiResult<WebhookListContainer> {
        let path = Query::new()
            .pair("limit", limit)
            .pair("offset", offset)
            .to_path("/webhooks");
        let response = self.client.get(&path, AuthMode::Basic).await?;
        self.client.resolve(response, OK, "get_webhook_list").await
    }

    /// Subscribe to `events` (e.g. `livestart`, `liveend`) for a user.
    pub async fn register_webhook(
        &self,
        user_id: &str,
        events: &[String],
    ) -> ApiResult<RegisterWebhookContainer> {
        let body = RegisterWebhookBody { user_id, events };
        let response = self
            .client
            .post("/webhooks", &body, AuthMode::Basic)
            .await?;
        self.client
            .resolve(response, CREATED, "register_webhook")
            .await
    }

    /// Unsubscribe `events` for a user.
    ///
    /// The parameters travel in the query string (`events[]` repeated), not a body.
    pub async fn remove_webhook(
        &self,
        user_id: &str,
        events: &[String],
    ) -> ApiResult<RemoveWebhookContainer> {
        let path = Query::new()
            .pair("user_id", user_id)
            .repeated("events[]", events)
            .to_path("/webhooks");
        let response = self.client.delete(&path, AuthMode::Basic).await?;
        self.client.resolve(response, OK, "remove_webhook").await
    }
}
