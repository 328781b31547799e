use std::fmt;

use serde::{Deserialize, Serialize};

/// Uniform error envelope returned on every non-success status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

/// Structured `{code, message}` body of the error envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    /// Per-field messages, present on validation errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Token response from POST /oauth2/access_token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessTokenContainer {
    pub token_type: String,
    pub expires_in: i64,
    pub access_token: String,
}

// ---------------------------------------------------------------------------
// Broadcasting
// ---------------------------------------------------------------------------

/// Ingest URL from GET /rtmp_url and GET /webm_url.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastingUrlContainer {
    pub enabled: bool,
    pub url: Option<String>,
    pub stream_key: Option<String>,
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub sub_categories: Vec<SubCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesContainer {
    pub categories: Vec<Category>,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub screen_id: String,
    pub name: String,
    pub image: String,
    pub profile: String,
    pub level: i64,
    #[serde(alias = "latest_movie_id")]
    pub last_movie_id: Option<String>,
    pub is_live: bool,
    /// Deprecated upstream; kept for older payloads.
    pub supporter_count: i64,
    /// Deprecated upstream; kept for older payloads.
    pub supporting_count: i64,
    /// Deprecated upstream; kept for older payloads.
    pub created: i64,
}

/// Application info from GET /verify_credentials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    pub client_id: String,
    pub name: String,
    pub owner_user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContainer {
    #[serde(alias = "User")]
    pub user: User,
    pub supporter_count: i64,
    pub supporting_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyCredentialsContainer {
    #[serde(alias = "App")]
    pub app: App,
    #[serde(alias = "User")]
    pub user: User,
    pub supporter_count: i64,
    pub supporting_count: i64,
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: String,
    pub message: String,
    pub from_user: User,
    pub created: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentListContainer {
    pub movie_id: String,
    pub all_count: i64,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentContainer {
    pub movie_id: String,
    pub all_count: i64,
    pub comment: Comment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteCommentContainer {
    pub comment_id: String,
}

/// Where a posted comment is also shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sns {
    #[default]
    None,
    Normal,
    Reply,
}

impl Sns {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Normal => "normal",
            Self::Reply => "reply",
        }
    }
}

// ---------------------------------------------------------------------------
// Gift
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gift {
    /// Not unique; the same id may appear more than once.
    pub id: String,
    pub message: String,
    pub item_image: String,
    pub item_sub_image: Option<String>,
    pub item_id: String,
    pub item_mp: String,
    pub item_name: String,
    pub user_image: String,
    pub user_screen_id: String,
    pub user_screen_name: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftContainer {
    pub slice_id: String,
    pub gifts: Vec<Gift>,
}

// ---------------------------------------------------------------------------
// Movie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub last_owner_comment: Option<String>,
    pub category: Option<String>,
    pub link: String,
    pub is_live: bool,
    pub is_recorded: bool,
    pub comment_count: i64,
    pub large_thumbnail: String,
    pub small_thumbnail: String,
    pub country: String,
    pub duration: i64,
    pub created: i64,
    pub is_collabo: bool,
    pub is_protected: bool,
    pub max_view_count: i64,
    pub current_view_count: i64,
    pub total_view_count: i64,
    pub hls_url: Option<String>,
}

/// Owner of a movie as embedded in movie responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Broadcaster {
    pub id: String,
    pub screen_id: String,
    pub name: String,
    pub image: String,
    pub profile: String,
    pub level: i64,
    pub last_movie_id: Option<String>,
    pub is_live: bool,
    pub supporter_count: i64,
    pub supporting_count: i64,
    pub created: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieContainer {
    pub movie: Movie,
    pub broadcaster: Broadcaster,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMoviesContainer {
    pub total_count: i64,
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentLiveSubtitleContainer {
    pub movie_id: String,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentLiveHashtagContainer {
    pub movie_id: String,
    pub hashtag: Option<String>,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchUsersContainer {
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLiveMoviesContainer {
    pub movies: Vec<MovieContainer>,
}

/// How `context` is interpreted by GET /search/lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveSearchType {
    Tag,
    Word,
    Category,
    New,
    Recommend,
}

impl LiveSearchType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Word => "word",
            Self::Category => "category",
            Self::New => "new",
            Self::Recommend => "recommend",
        }
    }
}

// ---------------------------------------------------------------------------
// Supporter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportingStatusContainer {
    pub is_supporting: bool,
    pub supported: i64,
    pub target_user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupporterUser {
    pub id: String,
    pub screen_id: String,
    pub name: String,
    pub image: String,
    pub profile: String,
    pub level: i64,
    pub last_movie_id: Option<String>,
    pub is_live: bool,
    pub supported: i64,
    pub supporter_count: i64,
    pub supporting_count: i64,
    pub created: i64,
    pub point: i64,
    pub total_point: i64,
}

/// Page of GET /users/:id/supporting or GET /users/:id/supporters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupporterListContainer {
    pub total: i64,
    #[serde(alias = "supporters")]
    pub supporting: Vec<SupporterUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportContainer {
    pub added_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnsupportContainer {
    pub removed_count: i64,
}

/// Ordering of GET /users/:id/supporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupporterSort {
    #[default]
    New,
    Ranking,
}

impl SupporterSort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Ranking => "ranking",
        }
    }
}

// ---------------------------------------------------------------------------
// Webhook
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub user_id: String,
    pub event: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookListContainer {
    pub all_count: i64,
    pub webhooks: Vec<Webhook>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterWebhookContainer {
    pub user_id: String,
    pub added_events: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveWebhookContainer {
    pub user_id: String,
    pub deleted_events: Vec<String>,
}
