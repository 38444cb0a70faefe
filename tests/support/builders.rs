// tests/support/builders.rs
//! テストデータ作成用ヘルパー
use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use super::helpers::send;

/// Registers `username` over HTTP and returns the issued token.
pub async fn register(app: &axum::Router, username: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({
            "user": {
                "username": username,
                "email": format!("{username}@example.com"),
                "password": "password123",
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register {username}: {body}");
    body["user"]["token"]
        .as_str()
        .expect("token in register response")
        .to_string()
}

#[derive(Debug, Clone)]
pub struct ArticleBuilder {
    title: String,
    description: Option<String>,
    body: String,
    tags: Vec<String>,
}

impl ArticleBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: Some(format!("about {title}")),
            body: format!("{title} body"),
            tags: Vec::new(),
        }
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }

    pub fn to_json(&self) -> Value {
        let mut article = json!({
            "title": self.title,
            "body": self.body,
            "tagList": self.tags,
        });
        if let Some(description) = &self.description {
            article["description"] = json!(description);
        }
        json!({ "article": article })
    }

    /// Creates the article as `token`'s owner and returns its slug.
    pub async fn create(&self, app: &axum::Router, token: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/articles",
            Some(token),
            Some(self.to_json()),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "create {}: {body}", self.title);
        body["article"]["slug"]
            .as_str()
            .expect("slug in create response")
            .to_string()
    }
}

/// Posts a comment and returns its id.
pub async fn add_comment(app: &axum::Router, token: &str, slug: &str, text: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        &format!("/api/articles/{slug}/comments"),
        Some(token),
        Some(json!({ "comment": { "body": text } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "add comment: {body}");
    body["comment"]["id"].as_i64().expect("comment id")
}
