// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, TagList,
};
use crate::domain::comment::CommentId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tag_list: TagList,
    pub author_id: UserId,
    /// Cached count of users whose favorites contain this article. Only ever
    /// written from a fresh recount of the favorites relation.
    pub favorites_count: u64,
    pub comment_ids: Vec<CommentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    pub fn references_comment(&self, comment_id: CommentId) -> bool {
        self.comment_ids.contains(&comment_id)
    }

    pub fn set_content(
        &mut self,
        title: Option<ArticleTitle>,
        description: Option<ArticleDescription>,
        body: Option<ArticleBody>,
        tag_list: Option<TagList>,
        now: DateTime<Utc>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(tag_list) = tag_list {
            self.tag_list = tag_list;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tag_list: TagList,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial content update. Fields left as `None` are not touched by the store.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub description: Option<ArticleDescription>,
    pub body: Option<ArticleBody>,
    pub tag_list: Option<TagList>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            description: None,
            body: None,
            tag_list: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_tag_list(mut self, tag_list: TagList) -> Self {
        self.tag_list = Some(tag_list);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.body.is_none()
            && self.tag_list.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            description: ArticleDescription::new("about"),
            body: ArticleBody::new("body").unwrap(),
            tag_list: TagList::new(["a", "b"]),
            author_id: UserId::new(1).unwrap(),
            favorites_count: 0,
            comment_ids: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn set_content_only_touches_present_fields() {
        let mut article = sample_article();
        let now = Utc::now() + chrono::Duration::seconds(5);
        article.set_content(
            None,
            Some(ArticleDescription::new("")),
            None,
            None,
            now,
        );
        assert_eq!(article.title.as_str(), "title");
        assert_eq!(article.description.as_str(), "");
        assert_eq!(article.body.as_str(), "body");
        assert_eq!(article.tag_list.as_slice().len(), 2);
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn ownership_is_by_author_id() {
        let article = sample_article();
        assert!(article.is_owned_by(UserId::new(1).unwrap()));
        assert!(!article.is_owned_by(UserId::new(2).unwrap()));
    }
}
