use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A comment holds a plain id back-reference to its article; the article's
/// `comment_ids` list is what makes it visible.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub body: CommentBody,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn belongs_to(&self, article_id: ArticleId) -> bool {
        self.article_id == article_id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: CommentBody,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

pub struct CanDeleteCommentSpec<'a> {
    comment: &'a Comment,
    user_id: UserId,
}

impl<'a> CanDeleteCommentSpec<'a> {
    pub fn new(comment: &'a Comment, user_id: UserId) -> Self {
        Self { comment, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.comment.author_id == self.user_id
    }
}
