// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by value objects and repositories.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object rejected its input.
    #[error("validation error: {0}")]
    Validation(String),
    /// A uniqueness rule failed: slug, username or email already taken.
    #[error("conflict: {0}")]
    Conflict(String),
    /// The addressed record, or a record it references, does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
