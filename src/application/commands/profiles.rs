// src/application/commands/profiles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ProfileEnvelope, error::ApplicationResult, identity::Identity,
        queries::profiles::load_profile_owner, views,
    },
    domain::user::{User, UserRepository},
};

/// Maintains the following edges the feed is built from.
pub struct ProfileCommandService {
    user_repo: Arc<dyn UserRepository>,
}

impl ProfileCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn follow(&self, mut actor: User, username: &str) -> ApplicationResult<ProfileEnvelope> {
        let target = load_profile_owner(self.user_repo.as_ref(), username).await?;
        self.user_repo.follow(actor.id, target.id).await?;
        actor.follow(target.id);
        Ok(Self::render(&target, actor))
    }

    pub async fn unfollow(
        &self,
        mut actor: User,
        username: &str,
    ) -> ApplicationResult<ProfileEnvelope> {
        let target = load_profile_owner(self.user_repo.as_ref(), username).await?;
        self.user_repo.unfollow(actor.id, target.id).await?;
        actor.unfollow(target.id);
        Ok(Self::render(&target, actor))
    }

    fn render(target: &User, actor: User) -> ProfileEnvelope {
        ProfileEnvelope {
            profile: views::render_profile(target, &Identity::Authenticated(actor)),
        }
    }
}
