use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// The caller's own account, including the token they authenticate with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserView {
    pub fn from_parts(user: User, token: impl Into<String>) -> Self {
        Self {
            email: user.email.into(),
            token: token.into(),
            username: user.username.into(),
            bio: user.bio,
            image: user.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: UserView,
}
