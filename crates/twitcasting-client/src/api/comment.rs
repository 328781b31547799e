use serde::Serialize;

use super::*;

#[derive(Serialize)]
struct PostCommentBody<'a> {
    comment: &'a str,
    sns: Sns,
}

#[derive(Debug, Clone)]
pub struct CommentService {
    client: Arc<ApiClient>,
}

impl CommentService {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get comments of a movie, newest first, by offset.
    pub async fn get_comments(
        &self,
        movie_id: &str,
        limit: u32,
        offset: u32,
        auth: AuthMode,
    ) -> ApiResult<CommentListContainer> {
        let path = Query::new()
            .pair("limit", limit)
            .pair("offset", offset)
            .to_path(&format!("/movies/{}/comments", segment(movie_id)));
        let response = self.client.get(&path, auth).await?;
        self.client.resolve(response, OK, "get_comments").await
    }

    /// Get comments of a movie posted after `slice_id`.
    pub async fn get_comments_by_slice_id(
        &self,
        movie_id: &str,
        limit: u32,
        slice_id: &str,
        auth: AuthMode,
    ) -> ApiResult<CommentListContainer> {
        let path = Query::new()
            .pair("limit", limit)
            .pair("slice_id", slice_id)
            .to_path(&format!("/movies/{}/comments", segment(movie_id)));
        let response = self.client.get(&path, auth).await?;
        self.client
            .resolve(response, OK, "get_comments_by_slice_id")
            .await
    }

    /// Post a comment as the authorized user. Bearer only.
    pub async fn post_comment(
        &self,
        movie_id: &str,
        comment: &str,
        sns: Sns,
    ) -> ApiResult<CommentContainer> {
        let path = format!("/movies/{}/comments", segment(movie_id));
        let body = PostCommentBody { comment, sns };
        let response = self.client.post(&path, &body, AuthMode::Bearer).await?;
        self.client.resolve(response, CREATED, "post_comment").await
    }

    /// Delete a comment. Only the poster or the movie owner may do so. Bearer only.
    pub async fn delete_comment(
        &self,
        movie_id: &str,
        comment_id: &str,
    ) -> ApiResult<DeleteCommentContainer> {
        let path = format!("/movies/{}/comments/{}", segment(movie_id), segment(comment_id));
        let response = self.client.delete(&path, AuthMode::Bearer).await?;
        self.client.resolve(response, OK, "delete_comment").await
    }
}
