use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserEnvelope, error::ApplicationResult},
    domain::user::{Email, PasswordHash, User, UserUpdate, Username},
};

/// `bio` and `image` distinguish "absent" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub bio: Option<Option<String>>,
    pub image: Option<Option<String>>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: User,
        token: &str,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserEnvelope> {
        let mut update = UserUpdate::new(actor.id);

        if let Some(username) = command.username {
            let username = Username::new(username)?;
            if username != actor.username {
                self.ensure_username_available(&username, Some(&actor)).await?;
                update = update.with_username(username);
            }
        }

        if let Some(email) = command.email {
            let email = Email::new(email)?;
            if email != actor.email {
                self.ensure_email_available(&email, Some(&actor)).await?;
                update = update.with_email(email);
            }
        }

        if let Some(password) = command.password {
            validate_password(&password)?;
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }

        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }
        if let Some(image) = command.image {
            update = update.with_image(image);
        }

        if update.is_empty() {
            return Ok(self.current_user(actor, token));
        }

        let user = self.user_repo.update(update).await?;
        Ok(self.current_user(user, token))
    }
}
