// src/presentation/http/extractors.rs
use crate::{
    application::{error::ApplicationError, identity::Identity},
    domain::user::User,
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// A resolved caller together with the token they presented.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Identity);

/// Accepts `Authorization: Bearer <t>` and `Authorization: Token <t>`.
pub fn extract_token(parts: &Parts) -> Option<String> {
    if let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Some(header.token().to_string());
    }

    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("token") && !token.is_empty()).then(|| token.to_string())
}

async fn app_state<S>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError>
where
    S: Send + Sync,
{
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;
    Ok(app_state)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let token = extract_token(parts);

        let user = app_state
            .services
            .identity
            .resolve_required(token.as_deref())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self {
            user,
            token: token.unwrap_or_default(),
        })
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let token = extract_token(parts);

        let identity = app_state
            .services
            .identity
            .resolve_optional(token.as_deref())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(identity))
    }
}
