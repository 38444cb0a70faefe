use super::UserCommandService;
use crate::{
    application::{
        dto::UserEnvelope,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Email,
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<UserEnvelope> {
        let invalid = || ApplicationError::unauthorized("invalid credentials");

        let email = Email::new(command.email).map_err(|_| invalid())?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid)?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|_| invalid())?;

        self.issue_envelope(user).await
    }
}
