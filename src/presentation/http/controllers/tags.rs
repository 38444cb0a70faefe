use crate::application::dto::TagsDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<TagsDto>> {
    state
        .services
        .tag_queries
        .list_tags()
        .await
        .into_http()
        .map(Json)
}
