// src/application/identity.rs
use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::domain::user::{User, UserRepository};

/// Who is making a request.
#[derive(Debug, Clone)]
pub enum Identity {
    Anonymous,
    Authenticated(User),
}

impl Identity {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self::Authenticated(user)
    }
}

/// Turns a raw bearer token into a loaded user record.
pub struct IdentityResolver {
    token_manager: Arc<dyn TokenManager>,
    user_repo: Arc<dyn UserRepository>,
}

impl IdentityResolver {
    pub fn new(token_manager: Arc<dyn TokenManager>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            token_manager,
            user_repo,
        }
    }

    /// A missing token is anonymous. A token that fails verification is still
    /// an error; a valid token for a user that no longer exists is anonymous.
    pub async fn resolve_optional(&self, token: Option<&str>) -> ApplicationResult<Identity> {
        let Some(token) = token else {
            return Ok(Identity::Anonymous);
        };
        let subject = self.token_manager.authenticate(token).await?;
        let user = self.user_repo.find_by_id(subject.user_id).await?;
        Ok(user.map_or(Identity::Anonymous, Identity::Authenticated))
    }

    pub async fn resolve_required(&self, token: Option<&str>) -> ApplicationResult<User> {
        let token =
            token.ok_or_else(|| ApplicationError::unauthorized("missing Authorization header"))?;
        match self.resolve_optional(Some(token)).await? {
            Identity::Authenticated(user) => Ok(user),
            Identity::Anonymous => {
                tracing::debug!("token subject no longer exists");
                Err(ApplicationError::unauthorized("user not found"))
            }
        }
    }
}
