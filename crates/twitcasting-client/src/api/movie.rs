use serde::Serialize;

use super::*;

#[derive(Serialize)]
struct SubtitleBody<'a> {
    subtitle: &'a str,
}

#[derive(Serialize)]
struct HashtagBody<'a> {
    hashtag: &'a str,
}

#[derive(Debug, Clone)]
pub struct MovieService {
    client: Arc<ApiClient>,
}

impl MovieService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get a movie and its broadcaster by movie ID.
    pub async fn get_movie(&self, movie_id: &str, auth: AuthMode) -> ApiResult<MovieContainer> {
        let response = self
            .client
            .get(&format!("/movies/{}", segment(movie_id)), auth)
            .await?;
        self.client.resolve(response, OK, "get_movie").await
    }

    /// Get a user's movies, newest first, by offset.
    pub async fn get_user_movies(
        &self,
        user_id: &str,
        limit: u32,
        offset: u32,
        auth: AuthMode,
    ) -> ApiResult<UserMoviesContainer> {
        let path = Query::new()
            .pair("limit", limit)
            .pair("offset", offset)
            .to_path(&format!("/users/{}/movies", segment(user_id)));
        let response = self.client.get(&path, auth).await?;
        self.client.resolve(response, OK, "get_user_movies").await
    }

    /// Get a user's movies older than `slice_id`.
    pub async fn get_user_movies_by_slice_id(
        &self,
        user_id: &str,
        limit: u32,
        slice_id: &str,
        auth: AuthMode,
    ) -> ApiResult<UserMoviesContainer> {
        let path = Query::new()
            .pair("limit", limit)
            .pair("slice_id", slice_id)
            .to_path(&format!("/users/{}/movies", segment(user_id)));
        let response = self.client.get(&path, auth).await?;
        self.client
            .resolve(response, OK, "get_user_movies_by_slice_id")
            .await
    }

    /// Get the live a user is currently broadcasting. Offline users yield an API error.
    pub async fn get_current_live(
        &self,
        user_id: &str,
        auth: AuthMode,
    ) -> ApiResult<MovieContainer> {
        let response = self
            .client
            .get(&format!("/users/{}/current_live", segment(user_id)), auth)
            .await?;
        self.client.resolve(response, OK, "get_current_live").await
    }

    /// Set the subtitle (telop) of the authorized user's current live. Bearer only.
    pub async fn set_current_live_subtitle(
        &self,
        subtitle: &str,
    ) -> ApiResult<CurrentLiveSubtitleContainer> {
        let body = SubtitleBody { subtitle };
        let response = self
            .client
            .post("/movies/subtitle", &body, AuthMode::Bearer)
            .await?;
        self.client
            .resolve(response, CREATED, "set_current_live_subtitle")
            .await
    }

    /// Clear the subtitle of the authorized user's current live. Bearer only.
    pub async fn unset_current_live_subtitle(&self) -> ApiResult<CurrentLiveSubtitleContainer> {
        let response = self
            .client
            .delete("/movies/subtitle", AuthMode::Bearer)
            .await?;
        self.client
            .resolve(response, OK, "unset_current_live_subtitle")
            .await
    }

    /// Set the hashtag of the authorized user's current live. Bearer only.
    pub async fn set_current_live_hashtag(
        &self,
        hashtag: &str,
    ) -> ApiResult<CurrentLiveHashtagContainer> {
        let body = HashtagBody { hashtag };
        let response = self
            .client
            .post("/movies/hashtag", &body, AuthMode::Bearer)
            .await?;
        self.client
            .resolve(response, CREATED, "set_current_live_hashtag")
            .await
    }

    /// Clear the hashtag of the authorized user's current live. Bearer only.
    pub async fn unset_current_live_hashtag(&self) -> ApiResult<CurrentLiveHashtagContainer> {
        let response = self
            .client
            .delete("/movies/hashtag", AuthMode::Bearer)
            .await?;
        self.client
            .resolve(response, OK, "unset_current_live_hashtag")
            .await
    }
}
