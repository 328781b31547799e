//! TwitCasting API v2 endpoint groups.
//!
//! Each group is a thin handle over the shared [`ApiClient`]: it picks the
//! path, body and authorization scheme, then hands the response to the
//! resolver with the status codes the endpoint treats as success.

mod broadcasting;
mod category;
mod comment;
mod gift;
mod movie;
pub(crate) mod query;
mod search;
mod supporter;
mod user;
mod webhook;

pub mod models;

#[cfg(test)]
mod tests;

pub use broadcasting::BroadcastingService;
pub use category::CategoryService;
pub use comment::CommentService;
pub use gift::GiftService;
pub use models::{
    AccessTokenContainer, ApiError, App, Broadcaster, BroadcastingUrlContainer,
    CategoriesContainer, Category, Comment, CommentContainer, CommentListContainer,
    CurrentLiveHashtagContainer, CurrentLiveSubtitleContainer, DeleteCommentContainer,
    ErrorResponse, Gift, GiftContainer, LiveSearchType, Movie, MovieContainer,
    RegisterWebhookContainer, RemoveWebhookContainer, SearchLiveMoviesContainer,
    SearchUsersContainer, Sns, SubCategory, SupportContainer, SupporterListContainer,
    SupporterSort, SupporterUser, SupportingStatusContainer, UnsupportContainer, User,
    UserContainer, UserMoviesContainer, VerifyCredentialsContainer, Webhook,
    WebhookListContainer,
};
pub use movie::MovieService;
pub use search::SearchService;
pub use supporter::SupporterService;
pub use user::UserService;
pub use webhook::WebhookService;

use std::sync::Arc;

use query::{Query, segment};

use crate::ApiResult;
use crate::client::{ApiClient, CREATED, OK};
use crate::credentials::AuthMode;
