use std::sync::Arc;

use crate::{
    application::{
        dto::ProfileEnvelope,
        error::{ApplicationError, ApplicationResult},
        identity::Identity,
        views,
    },
    domain::user::{User, UserRepository, Username},
};

pub struct ProfileQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl ProfileQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get_profile(
        &self,
        viewer: &Identity,
        username: &str,
    ) -> ApplicationResult<ProfileEnvelope> {
        let user = load_profile_owner(self.user_repo.as_ref(), username).await?;
        Ok(ProfileEnvelope {
            profile: views::render_profile(&user, viewer),
        })
    }
}

pub async fn load_profile_owner(
    user_repo: &dyn UserRepository,
    username: &str,
) -> ApplicationResult<User> {
    let not_found = || ApplicationError::not_found(format!("profile '{username}' not found"));
    let username = Username::new(username).map_err(|_| not_found())?;
    user_repo.find_by_username(&username).await?.ok_or_else(not_found)
}
