use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserEnvelope, error::ApplicationResult},
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserEnvelope> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        tokio::try_join!(
            self.ensure_username_available(&username, None),
            self.ensure_email_available(&email, None),
        )?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(username, email, password_hash, self.clock.now());

        // The unique indexes still catch a concurrent registration.
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user = %user.id, username = %user.username, "user registered");

        self.issue_envelope(user).await
    }
}
