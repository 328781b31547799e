//! Endpoint tests against an in-process HTTP server.
//!
//! The server records every request it receives and answers with one
//! configured status and JSON body.

mod broadcasting;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use serde::Serialize;
use tokio::task::JoinHandle;

use super::*;
use crate::credentials::AccessToken;
use crate::logger::tests::RecordingLogger;
use crate::logger::{Logger, NoopLogger};
use crate::{ServiceLocator, TwitCastingError};

pub(super) const BASIC: &str = "Basic Y2xpZW50OnNlY3JldA==";
pub(super) const BEARER: &str = "Bearer bearer";

#[derive(Debug, Clone)]
pub(super) struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Assert the fixed API headers and the expected `Authorization` value.
    pub fn assert_api_headers(&self, authorization: &str) {
        assert_eq!(self.header("x-api-version"), Some("2.0"));
        assert_eq!(self.header("accept"), Some("application/json"));
        assert_eq!(self.header("authorization"), Some(authorization));
        if self.body.is_empty() {
            assert_eq!(self.header("content-type"), None);
        } else {
            assert_eq!(self.header("content-type"), Some("application/json"));
        }
    }
}

struct MockState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<Recorded>>,
}

pub(super) struct MockServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(status: u16, body: &impl Serialize) -> Self {
        Self::start_raw(status, serde_json::to_string(body).unwrap()).await
    }

    pub async fn start_raw(status: u16, body: impl Into<String>) -> Self {
        let state = Arc::new(MockState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Locator with client/secret and a bearer token configured.
    pub fn locator(&self) -> ServiceLocator {
        self.locator_with(
            AccessToken::new("client", "secret").with_bearer("bearer"),
            Arc::new(NoopLogger),
        )
    }

    pub fn locator_with(&self, token: AccessToken, logger: Arc<dyn Logger>) -> ServiceLocator {
        ServiceLocator::with_base_url(reqwest::Client::new(), logger, &token, self.url()).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The single request the server received.
    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });
    (
        state.status,
        [(CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

pub(super) fn invalid_token() -> ErrorResponse {
    ErrorResponse {
        error: ApiError {
            code: 1000,
            message: "Invalid token".into(),
            details: None,
        },
    }
}

/// Assert `result` is the structured `invalid_token()` error with `status`.
#[track_caller]
pub(super) fn assert_invalid_token<T: std::fmt::Debug>(result: ApiResult<T>, status: u16) {
    match result {
        Err(TwitCastingError::Api { status: s, error }) => {
            assert_eq!(s, status);
            assert_eq!(error, invalid_token().error);
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

pub(super) fn sample_user() -> User {
    User {
        id: "182224938".into(),
        screen_id: "twitcasting_jp".into(),
        name: "ツイキャス公式".into(),
        image: "http://202-234-44-53.moi.st/image3s/pbs.twimg.com/profile_images/613625726512705536/GLlBoXcS_normal.png".into(),
        profile: "ツイキャスの公式アカウントです。".into(),
        level: 24,
        last_movie_id: Some("189037369".into()),
        is_live: false,
        supporter_count: 0,
        supporting_count: 0,
        created: 0,
    }
}

pub(super) fn sample_movie() -> Movie {
    Movie {
        id: "189037369".into(),
        user_id: "182224938".into(),
        title: "ライブ #189037369".into(),
        subtitle: Some("主催ライブ".into()),
        last_owner_comment: Some("もいもい".into()),
        category: Some("girls_jcjk_jp".into()),
        link: "http://twitcasting.tv/twitcasting_jp/movie/189037369".into(),
        is_live: false,
        is_recorded: false,
        comment_count: 2124,
        large_thumbnail: "http://202-230-12-92.twitcasting.tv/image3/image.twitcasting.tv/image55_1/39/7b/0b4468d3-1-l.jpg".into(),
        small_thumbnail: "http://202-230-12-92.twitcasting.tv/image3/image.twitcasting.tv/image55_1/39/7b/0b4468d3-1-s.jpg".into(),
        country: "jp".into(),
        duration: 1186,
        created: 1438500282,
        is_collabo: false,
        is_protected: false,
        max_view_count: 1675,
        current_view_count: 20848,
        total_view_count: 20848,
        hls_url: Some("https://twitcasting.tv/twitcasting_jp/metastream.m3u8/?video=1".into()),
    }
}

// ---------------------------------------------------------------------------
// Dispatcher behaviour shared by every endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bearer_endpoint_without_token_fails_before_sending() {
    let server = MockServer::start(200, &GiftContainer::default()).await;
    let locator = server.locator_with(AccessToken::new("client", "secret"), Arc::new(NoopLogger));

    let err = locator.gift.get_gifts().await.unwrap_err();

    assert!(matches!(err, TwitCastingError::BearerTokenMissing));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn basic_endpoint_works_without_bearer_token() {
    let expected = WebhookListContainer::default();
    let server = MockServer::start(200, &expected).await;
    let locator = server.locator_with(AccessToken::new("client", "secret"), Arc::new(NoopLogger));

    let resp = locator.webhook.get_webhook_list(10, 0).await.unwrap();

    assert_eq!(resp, expected);
    server.only_request().assert_api_headers(BASIC);
}

#[tokio::test]
async fn transport_failure_is_generic_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let locator = ServiceLocator::with_base_url(
        reqwest::Client::new(),
        Arc::new(NoopLogger),
        &AccessToken::new("client", "secret"),
        format!("http://{addr}"),
    )
    .unwrap();

    let err = locator
        .category
        .get_categories("ja", AuthMode::Basic)
        .await
        .unwrap_err();
    assert!(matches!(err, TwitCastingError::Http(_)));
    assert!(!err.is_api_error());
}

#[tokio::test]
async fn malformed_success_body_is_decode_failure() {
    let server = MockServer::start_raw(200, "{\"categories\": [").await;
    let logger = Arc::new(RecordingLogger::default());
    let locator = server.locator_with(AccessToken::new("client", "secret"), logger.clone());

    let err = locator
        .category
        .get_categories("ja", AuthMode::Basic)
        .await
        .unwrap_err();

    assert!(matches!(err, TwitCastingError::Json(_)));
    assert_eq!(logger.levels().last(), Some(&"error"));
}

#[tokio::test]
async fn malformed_error_body_is_decode_failure() {
    let server = MockServer::start_raw(503, "Service Unavailable").await;
    let locator = server.locator();

    let err = locator
        .category
        .get_categories("ja", AuthMode::Basic)
        .await
        .unwrap_err();

    assert!(matches!(err, TwitCastingError::Json(_)));
}

#[tokio::test]
async fn api_error_is_logged_as_warning() {
    let server = MockServer::start(401, &invalid_token()).await;
    let logger = Arc::new(RecordingLogger::default());
    let locator = server.locator_with(
        AccessToken::new("client", "secret").with_bearer("bearer"),
        logger.clone(),
    );

    assert_invalid_token(locator.user.verify_credentials().await, 401);
    assert!(logger.levels().contains(&"warn"));
    assert!(!logger.levels().contains(&"error"));
}

#[tokio::test]
async fn repeated_get_yields_identical_results() {
    let expected = CategoriesContainer {
        categories: vec![Category {
            id: "_system".into(),
            name: "その他".into(),
            sub_categories: vec![SubCategory {
                id: "_system_1".into(),
                name: "ゲーム".into(),
                count: 3,
            }],
        }],
    };
    let server = MockServer::start(200, &expected).await;
    let locator = server.locator();

    let first = locator
        .category
        .get_categories("ja", AuthMode::Basic)
        .await
        .unwrap();
    let second = locator
        .category
        .get_categories("ja", AuthMode::Basic)
        .await
        .unwrap();

    assert_eq!(first, expected);
    assert_eq!(first, second);
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn categories_honour_auth_choice() {
    let expected = CategoriesContainer::default();
    let server = MockServer::start(200, &expected).await;
    let locator = server.locator();

    locator
        .category
        .get_categories("ja", AuthMode::Basic)
        .await
        .unwrap();
    locator
        .category
        .get_categories("en", AuthMode::Bearer)
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].path, "/categories");
    assert_eq!(requests[0].query.as_deref(), Some("lang=ja"));
    requests[0].assert_api_headers(BASIC);
    assert_eq!(requests[1].query.as_deref(), Some("lang=en"));
    requests[1].assert_api_headers(BEARER);
}

#[tokio::test]
async fn gifts_use_bearer_and_decode() {
    let expected = GiftContainer {
        slice_id: "2184".into(),
        gifts: vec![Gift {
            id: "2184".into(),
            message: "ありがとう".into(),
            item_image: "https://twitcasting.tv/img/item_tea.png".into(),
            item_sub_image: None,
            item_id: "tea".into(),
            item_mp: "0".into(),
            item_name: "お茶".into(),
            user_image: "https://example.com/u.png".into(),
            user_screen_id: "twitcasting_jp".into(),
            user_screen_name: "ツイキャス公式".into(),
            user_name: "twitcasting_jp".into(),
        }],
    };
    let server = MockServer::start(200, &expected).await;

    let resp = server.locator().gift.get_gifts().await.unwrap();

    assert_eq!(resp, expected);
    let req = server.only_request();
    assert_eq!(req.path, "/gifts");
    assert_eq!(req.query, None);
    req.assert_api_headers(BEARER);
}

#[tokio::test]
async fn access_token_exchange_posts_form_without_api_headers() {
    let expected = AccessTokenContainer {
        token_type: "bearer".into(),
        expires_in: 86400,
        access_token: "access_token".into(),
    };
    let server = MockServer::start(200, &expected).await;

    let resp = server
        .locator()
        .auth
        .post_access_token("client", "secret", "code", "http://localhost/callback")
        .await
        .unwrap();

    assert_eq!(resp, expected);
    let req = server.only_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/oauth2/access_token");
    assert_eq!(
        req.header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(req.header("authorization"), None);
    assert_eq!(req.header("x-api-version"), None);
    assert_eq!(
        req.body,
        "code=code&grant_type=authorization_code&client_id=client&client_secret=secret&redirect_uri=http%3A%2F%2Flocalhost%2Fcallback"
    );
}

#[tokio::test]
async fn access_token_exchange_accepts_created() {
    let expected = AccessTokenContainer {
        token_type: "bearer".into(),
        expires_in: 3600,
        access_token: "t".into(),
    };
    let server = MockServer::start(201, &expected).await;

    let resp = server
        .locator()
        .auth
        .post_access_token("client", "secret", "code", "http://localhost/callback")
        .await
        .unwrap();
    assert_eq!(resp, expected);
}
