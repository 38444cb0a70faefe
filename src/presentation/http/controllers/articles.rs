// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleEnvelope, ArticleList},
    queries::articles::{FeedQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

/// Query-string values stay raw strings; coercion happens in the filter
/// builder so malformed numbers fall back to defaults instead of failing.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleRequest<T> {
    pub article: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticlePayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticlePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(viewer): MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleList>> {
    let query = ListArticlesQuery {
        tag: params.tag,
        author: params.author,
        favorited: params.favorited,
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .article_queries
        .list_articles(&viewer, query)
        .await
        .into_http()
        .map(Json)
}

pub async fn feed(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Query(params): Query<FeedParams>,
) -> HttpResult<Json<ArticleList>> {
    let query = FeedQuery {
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .article_queries
        .feed(user, query)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(viewer): MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleEnvelope>> {
    state
        .services
        .article_queries
        .get_article_by_slug(&viewer, GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Json(ArticleRequest { article }): Json<ArticleRequest<NewArticlePayload>>,
) -> HttpResult<Json<ArticleEnvelope>> {
    let command = CreateArticleCommand {
        title: article.title,
        description: article.description,
        body: article.body,
        tag_list: article.tag_list,
    };

    state
        .services
        .article_commands
        .create_article(user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(slug): Path<String>,
    Json(ArticleRequest { article }): Json<ArticleRequest<UpdateArticlePayload>>,
) -> HttpResult<Json<ArticleEnvelope>> {
    let command = UpdateArticleCommand {
        slug,
        title: article.title,
        description: article.description,
        body: article.body,
        tag_list: article.tag_list,
    };

    state
        .services
        .article_commands
        .update_article(user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { slug })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn favorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleEnvelope>> {
    state
        .services
        .favorite_commands
        .favorite(user, &slug)
        .await
        .into_http()
        .map(Json)
}

pub async fn unfavorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleEnvelope>> {
    state
        .services
        .favorite_commands
        .unfavorite(user, &slug)
        .await
        .into_http()
        .map(Json)
}
