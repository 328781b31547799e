use serde::Serialize;

use super::*;

#[derive(Serialize)]
struct TargetUsersBody<'a> {
    target_user_ids: &'a [String],
}

#[derive(Debug, Clone)]
pub struct SupporterService {
    client: Arc<ApiClient>,
}

impl SupporterService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Check whether `user_id` supports `target_user_id`.
    pub async fn get_supporting_status(
        &self,
        user_id: &str,
        target_user_id: &str,
        auth: AuthMode,
    ) -> ApiResult<SupportingStatusContainer> {
        let path = Query::new()
            .pair("target_user_id", target_user_id)
            .to_path(&format!("/users/{}/supporting_status", segment(user_id)));
        let response = self.client.get(&path, auth).await?;
        self.client
            .resolve(response, OK, "get_supporting_status")
            .await
    }

    /// Support the given users as the authorized user. Bearer only.
    pub async fn support_users(&self, target_user_ids: &[String]) -> ApiResult<SupportContainer> {
        let body = TargetUsersBody { target_user_ids };
        let response = self.client.put("/support", &body, AuthMode::Bearer).await?;
        self.client.resolve(response, CREATED, "support_users").await
    }

    /// Stop supporting the given users as the authorized user. Bearer only.
    pub async fn unsupport_users(
        &self,
        target_user_ids: &[String],
    ) -> ApiResult<UnsupportContainer> {
        let body = TargetUsersBody { target_user_ids };
        let response = self
            .client
            .put("/unsupport", &body, AuthMode::Bearer)
            .await?;
        self.client.resolve(response, OK, "unsupport_users").await
    }

    /// List users that `user_id` supports.
    pub async fn get_supporting_list(
        &self,
        user_id: &str,
        limit: u32,
        offset: u32,
        auth: AuthMode,
    ) -> ApiResult<SupporterListContainer> {
        let path = Query::new()
            .pair("limit", limit)
            .pair("offset", offset)
            .to_path(&format!("/users/{}/supporting", segment(user_id)));
        let response = self.client.get(&path, auth).await?;
        self.client.resolve(response, OK, "get_supporting_list").await
    }

    /// List users supporting `user_id`.
    pub async fn get_supporter_list(
        &self,
        user_id: &str,
        limit: u32,
        offset: u32,
        sort: SupporterSort,
        auth: AuthMode,
    ) -> ApiResult<SupporterListContainer> {
        let path = Query::new()
            .pair("limit", limit)
            .pair("offset", offset)
            .pair("sort", sort.as_str())
            .to_path(&format!("/users/{}/supporters", segment(user_id)));
        let response = self.client.get(&path, auth).await?;
        self.client.resolve(response, OK, "get_supporter_list").await
    }
}
