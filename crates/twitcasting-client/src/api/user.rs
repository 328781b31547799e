use super::*;

#[derive(Debug, Clone)]
pub struct UserService {
    client: Arc<ApiClient>,
}

impl UserService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get user profile by user ID or screen ID.
    pub async fn get_user(&self, user_id: &str, auth: AuthMode) -> ApiResult<UserContainer> {
        let response = self
            .client
            .get(&format!("/users/{}", segment(user_id)), auth)
            .await?;
        self.client.resolve(response, OK, "get_user").await
    }

    /// Get the application and user behind the configured bearer token. Bearer only.
    pub async fn verify_credentials(&self) -> ApiResult<VerifyCredentialsContainer> {
        let response = self
            .client
            .get("/verify_credentials", AuthMode::Bearer)
            .await?;
        self.client.resolve(response, OK, "verify_credentials").await
    }
}
