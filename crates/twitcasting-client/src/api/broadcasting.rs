use super::*;

/// Ingest URL endpoints. Bearer only.
#[derive(Debug, Clone)]
pub struct BroadcastingService {
    client: Arc<ApiClient>,
}

impl BroadcastingService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get the RTMP ingest URL and stream key of the authorized user.
    pub async fn get_rtmp_url(&self) -> ApiResult<BroadcastingUrlContainer> {
        let response = self.client.get("/rtmp_url", AuthMode::Bearer).await?;
        self.client.resolve(response, OK, "get_rtmp_url").await
    }

    /// Get the WebM ingest URL of the authorized user.
    pub async fn get_webm_url(&self) -> ApiResult<BroadcastingUrlContainer> {
        let response = self.client.get("/webm_url", AuthMode::Bearer).await?;
        self.client.resolve(response, OK, "get_webm_url").await
    }
}
