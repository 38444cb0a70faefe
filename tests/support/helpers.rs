// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FakeTokenManager, MemoryStore, PlainPasswordHasher, TickingClock, TitleSlug};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use conduit_core::application::ports::{
    ClockPort, PasswordHasherPort, SlugGeneratorPort, TokenManagerPort,
};
use conduit_core::application::services::ApplicationServices;
use conduit_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository, FavoriteRepository},
    comment::CommentRepository,
    user::UserRepository,
};
use conduit_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

/// Wires every service against one shared in-memory store.
pub fn build_services(store: &MemoryStore) -> Arc<ApplicationServices> {
    let user_repo: Arc<dyn UserRepository> = Arc::new(store.clone());
    let article_write: Arc<dyn ArticleWriteRepository> = Arc::new(store.clone());
    let article_read: Arc<dyn ArticleReadRepository> = Arc::new(store.clone());
    let favorite_repo: Arc<dyn FavoriteRepository> = Arc::new(store.clone());
    let comment_repo: Arc<dyn CommentRepository> = Arc::new(store.clone());
    let password_hasher: Arc<PasswordHasherPort> = Arc::new(PlainPasswordHasher);
    let token_manager: Arc<TokenManagerPort> = Arc::new(FakeTokenManager);
    let clock: Arc<ClockPort> = Arc::new(TickingClock::default());
    let slugger: Arc<SlugGeneratorPort> = Arc::new(TitleSlug);

    Arc::new(ApplicationServices::new(
        user_repo,
        article_write,
        article_read,
        favorite_repo,
        comment_repo,
        password_hasher,
        token_manager,
        clock,
        slugger,
    ))
}

pub fn make_test_router(store: &MemoryStore) -> axum::Router {
    let state = HttpState {
        services: build_services(store),
    };
    build_router(state, &[])
}

/// Sends one request and returns the status with the decoded JSON body.
/// An empty body decodes to `Value::Null`.
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected a JSON body")
    };
    (status, json)
}

/// Asserts an `{error, message}` body with the given status.
pub fn assert_error_body(status: StatusCode, body: &Value, expected_status: StatusCode) {
    assert_eq!(status, expected_status);
    let error = body.get("error").and_then(Value::as_str).unwrap_or("");
    let message = body.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(
        error,
        expected_status.canonical_reason().unwrap_or("error"),
        "unexpected error field: {error}"
    );
    assert!(!message.is_empty(), "expected non-empty message field");
}

/// Bodiless statuses: 401, 403 and 404 carry no payload.
pub fn assert_bare(status: StatusCode, body: &Value, expected_status: StatusCode) {
    assert_eq!(status, expected_status);
    assert!(body.is_null(), "expected an empty body, got {body}");
}

/// Slugs of an `{articles, articlesCount}` payload, in response order.
pub fn slugs(body: &Value) -> Vec<String> {
    body["articles"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|a| a["slug"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
