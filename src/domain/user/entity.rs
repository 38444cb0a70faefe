// src/domain/user/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: HashSet<UserId>,
    pub favorites: HashSet<ArticleId>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_following(&self, other: UserId) -> bool {
        self.following.contains(&other)
    }

    pub fn has_favorited(&self, article_id: ArticleId) -> bool {
        self.favorites.contains(&article_id)
    }

    /// Returns `false` when the article was already in the set.
    pub fn favorite(&mut self, article_id: ArticleId) -> bool {
        self.favorites.insert(article_id)
    }

    pub fn unfavorite(&mut self, article_id: ArticleId) -> bool {
        self.favorites.remove(&article_id)
    }

    pub fn follow(&mut self, other: UserId) -> bool {
        self.following.insert(other)
    }

    pub fn unfollow(&mut self, other: UserId) -> bool {
        self.following.remove(&other)
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Email,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            created_at,
        }
    }
}

/// Partial update of a user record. `bio` and `image` are doubly optional so
/// that "leave untouched" and "clear" stay distinct.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub username: Option<Username>,
    pub email: Option<Email>,
    pub password_hash: Option<PasswordHash>,
    pub bio: Option<Option<String>>,
    pub image: Option<Option<String>>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            username: None,
            email: None,
            password_hash: None,
            bio: None,
            image: None,
        }
    }

    pub fn with_username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_bio(mut self, bio: Option<String>) -> Self {
        self.bio = Some(bio);
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = Some(image);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.bio.is_none()
            && self.image.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new(1).unwrap(),
            username: Username::new("alice").unwrap(),
            email: Email::new("alice@example.com").unwrap(),
            password_hash: PasswordHash::new("hash").unwrap(),
            bio: None,
            image: None,
            following: HashSet::new(),
            favorites: HashSet::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn favorite_is_idempotent() {
        let mut user = sample_user();
        let article = ArticleId::new(7).unwrap();
        assert!(user.favorite(article));
        assert!(!user.favorite(article));
        assert_eq!(user.favorites.len(), 1);
        assert!(user.has_favorited(article));
        assert!(user.unfavorite(article));
        assert!(!user.unfavorite(article));
        assert!(!user.has_favorited(article));
    }

    #[test]
    fn follow_tracks_membership() {
        let mut user = sample_user();
        let other = UserId::new(2).unwrap();
        assert!(!user.is_following(other));
        user.follow(other);
        assert!(user.is_following(other));
        user.unfollow(other);
        assert!(!user.is_following(other));
    }

    #[test]
    fn empty_update_is_detected() {
        let id = UserId::new(1).unwrap();
        assert!(UserUpdate::new(id).is_empty());
        assert!(!UserUpdate::new(id).with_bio(None).is_empty());
    }
}
