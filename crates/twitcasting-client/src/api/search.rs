use super::*;

/// Search results are always requested in Japanese.
const SEARCH_LANG: &str = "ja";

#[derive(Debug, Clone)]
pub struct SearchService {
    client: Arc<ApiClient>,
}

impl SearchService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Search users by space-separated words.
    pub async fn search_users(
        &self,
        words: &str,
        limit: u32,
        auth: AuthMode,
    ) -> ApiResult<SearchUsersContainer> {
        let path = Query::new()
            .pair("words", words)
            .pair("limit", limit)
            .pair("lang", SEARCH_LANG)
            .to_path("/search/users");
        let response = self.client.get(&path, auth).await?;
        self.client.resolve(response, OK, "search_users").await
    }

    /// Search lives that are currently on air.
    ///
    /// `context` is the tag, words or sub-category ID matching `search_type`;
    /// it is ignored by the API for `New` and `Recommend`.
    pub async fn search_live_movies(
        &self,
        search_type: LiveSearchType,
        context: &str,
        limit: u32,
        auth: AuthMode,
    ) -> ApiResult<SearchLiveMoviesContainer> {
        let path = Query::new()
            .pair("type", search_type.as_str())
            .pair("context", context)
            .pair("limit", limit)
            .pair("lang", SEARCH_LANG)
            .to_path("/search/lives");
        let response = self.client.get(&path, auth).await?;
        self.client.resolve(response, OK, "search_live_movies").await
    }
}
