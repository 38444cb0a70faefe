use std::sync::Arc;

use crate::{
    application::{
        dto::{TokenSubject, UserEnvelope, UserView},
        error::{ApplicationError, ApplicationResult},
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
    },
    domain::user::{Email, User, UserRepository, Username},
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }

    /// The caller's own record, echoing the token they presented.
    pub fn current_user(&self, user: User, token: &str) -> UserEnvelope {
        UserEnvelope {
            user: UserView::from_parts(user, token),
        }
    }

    pub(super) async fn issue_envelope(&self, user: User) -> ApplicationResult<UserEnvelope> {
        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
        };
        let token = self.token_manager.issue(subject).await?;
        Ok(UserEnvelope {
            user: UserView::from_parts(user, token.token),
        })
    }

    pub(super) async fn ensure_username_available(
        &self,
        username: &Username,
        except: Option<&User>,
    ) -> ApplicationResult<()> {
        match self.user_repo.find_by_username(username).await? {
            Some(existing) if except.is_none_or(|me| me.id != existing.id) => Err(
                ApplicationError::validation(format!("username '{username}' is already taken")),
            ),
            _ => Ok(()),
        }
    }

    pub(super) async fn ensure_email_available(
        &self,
        email: &Email,
        except: Option<&User>,
    ) -> ApplicationResult<()> {
        match self.user_repo.find_by_email(email).await? {
            Some(existing) if except.is_none_or(|me| me.id != existing.id) => Err(
                ApplicationError::validation(format!("email '{email}' is already registered")),
            ),
            _ => Ok(()),
        }
    }
}
