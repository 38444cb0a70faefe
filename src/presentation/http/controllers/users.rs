// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand, UpdateUserCommand},
    dto::UserEnvelope,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct UserRequest<T> {
    pub user: T,
}

#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// `bio` and `image` accept an explicit `null` to clear the stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserPayload {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
}

/// Maps a present field (including `null`) to `Some`; absence is handled by
/// `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(UserRequest { user }): Json<UserRequest<RegisterPayload>>,
) -> HttpResult<Json<UserEnvelope>> {
    let command = RegisterUserCommand {
        username: user.username,
        email: user.email,
        password: user.password,
    };

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(UserRequest { user }): Json<UserRequest<LoginPayload>>,
) -> HttpResult<Json<UserEnvelope>> {
    let command = LoginUserCommand {
        email: user.email,
        password: user.password,
    };

    state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn current_user(
    Extension(state): Extension<HttpState>,
    Authenticated { user, token }: Authenticated,
) -> Json<UserEnvelope> {
    Json(state.services.user_commands.current_user(user, &token))
}

pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated { user, token }: Authenticated,
    Json(UserRequest { user: payload }): Json<UserRequest<UpdateUserPayload>>,
) -> HttpResult<Json<UserEnvelope>> {
    let command = UpdateUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
        bio: payload.bio,
        image: payload.image,
    };

    state
        .services
        .user_commands
        .update_user(user, &token, command)
        .await
        .into_http()
        .map(Json)
}
