use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand},
    dto::{CommentEnvelope, CommentList},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub comment: CommentPayload,
}

#[derive(Debug, Deserialize)]
pub struct CommentPayload {
    pub body: String,
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(viewer): MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<CommentList>> {
    state
        .services
        .comment_queries
        .list_comments(&viewer, &slug)
        .await
        .into_http()
        .map(Json)
}

pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<Json<CommentEnvelope>> {
    let command = CreateCommentCommand {
        slug,
        body: payload.comment.body,
    };

    state
        .services
        .comment_commands
        .create_comment(user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path((slug, comment_id)): Path<(String, String)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(&user, DeleteCommentCommand { slug, comment_id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
