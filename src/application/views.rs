// src/application/views.rs
//! Caller-relative rendering. Everything here is pure: the caller loads the
//! entity, its author and the viewer beforehand.
use std::collections::HashMap;

use crate::application::{
    dto::{ArticleView, CommentView, ProfileView},
    error::{ApplicationError, ApplicationResult},
    identity::Identity,
};
use crate::domain::{
    article::Article,
    comment::Comment,
    user::{User, UserId},
};

pub fn render_profile(user: &User, viewer: &Identity) -> ProfileView {
    let following = match viewer {
        Identity::Anonymous => false,
        Identity::Authenticated(me) => me.is_following(user.id),
    };
    ProfileView {
        username: user.username.to_string(),
        bio: user.bio.clone(),
        image: user.image.clone(),
        following,
    }
}

pub fn render_article(article: &Article, author: &User, viewer: &Identity) -> ArticleView {
    let favorited = match viewer {
        Identity::Anonymous => false,
        Identity::Authenticated(me) => me.has_favorited(article.id),
    };
    ArticleView {
        slug: article.slug.to_string(),
        title: article.title.to_string(),
        description: article.description.as_str().to_string(),
        body: article.body.to_string(),
        tag_list: article.tag_list.as_slice().to_vec(),
        created_at: article.created_at,
        updated_at: article.updated_at,
        favorited,
        favorites_count: article.favorites_count,
        author: render_profile(author, viewer),
    }
}

pub fn render_comment(comment: &Comment, author: &User, viewer: &Identity) -> CommentView {
    CommentView {
        id: comment.id.into(),
        body: comment.body.as_str().to_string(),
        created_at: comment.created_at,
        updated_at: comment.updated_at,
        author: render_profile(author, viewer),
    }
}

/// Authors keyed by id, as loaded for a batch render.
pub struct AuthorIndex(HashMap<UserId, User>);

impl AuthorIndex {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self(users.into_iter().map(|u| (u.id, u)).collect())
    }

    pub fn get(&self, id: UserId) -> ApplicationResult<&User> {
        self.0.get(&id).ok_or_else(|| {
            ApplicationError::infrastructure(format!("author {id} missing from user store"))
        })
    }
}
