use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Access and lookup failures carry no body; validation and upstream
/// failures carry `{error, message}`.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: Option<String>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(_) => Self::bare(StatusCode::NOT_FOUND),
            ApplicationError::Unauthorized(_) => Self::bare(StatusCode::UNAUTHORIZED),
            ApplicationError::Forbidden(_) => Self::bare(StatusCode::FORBIDDEN),
            ApplicationError::Validation(msg) => Self::detailed(StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApplicationError::Infrastructure(msg) => Self::upstream(msg),
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::NotFound(_) => Self::bare(StatusCode::NOT_FOUND),
                DomainError::Validation(msg) | DomainError::Conflict(msg) => {
                    Self::detailed(StatusCode::UNPROCESSABLE_ENTITY, msg)
                }
                DomainError::Persistence(msg) => Self::upstream(msg),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn bare(status: StatusCode) -> Self {
        Self {
            status,
            message: None,
        }
    }

    fn detailed(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message: Some(message),
        }
    }

    fn upstream(message: String) -> Self {
        tracing::error!(error = %message, "upstream failure");
        Self::detailed(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let Some(message) = self.message else {
            return self.status.into_response();
        };
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
