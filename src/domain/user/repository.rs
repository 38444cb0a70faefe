use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{Email, UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Batch lookup used to load authors for rendering. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>>;

    /// Adding an existing edge is a no-op.
    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()>;

    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()>;
}
