use crate::application::dto::ProfileEnvelope;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(viewer): MaybeAuthenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileEnvelope>> {
    state
        .services
        .profile_queries
        .get_profile(&viewer, &username)
        .await
        .into_http()
        .map(Json)
}

pub async fn follow(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileEnvelope>> {
    state
        .services
        .profile_commands
        .follow(user, &username)
        .await
        .into_http()
        .map(Json)
}

pub async fn unfollow(
    Extension(state): Extension<HttpState>,
    Authenticated { user, .. }: Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileEnvelope>> {
    state
        .services
        .profile_commands
        .unfollow(user, &username)
        .await
        .into_http()
        .map(Json)
}
