use super::*;

#[derive(Debug, Clone)]
pub struct GiftService {
    client: Arc<ApiClient>,
}

impl GiftService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get gifts received by the authorized user in the last 10 seconds. Bearer only.
    pub async fn get_gifts(&self) -> ApiResult<GiftContainer> {
        let response = self.client.get("/gifts", AuthMode::Bearer).await?;
        self.client.resolve(response, OK, "get_gifts").await
    }
}
