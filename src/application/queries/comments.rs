// src/application/queries/comments.rs
use std::sync::Arc;

use super::articles::load_article_by_slug;
use crate::{
    application::{
        dto::CommentList, error::ApplicationResult, identity::Identity, services::AuthorLoader,
    },
    domain::{article::ArticleReadRepository, comment::CommentRepository},
};

pub struct CommentQueryService {
    article_repo: Arc<dyn ArticleReadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    authors: Arc<AuthorLoader>,
}

impl CommentQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        authors: Arc<AuthorLoader>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            authors,
        }
    }

    /// Comments reachable from the article's reference list, newest first.
    /// Dangling references and comments that point at another article are
    /// skipped.
    pub async fn list_comments(
        &self,
        viewer: &Identity,
        slug: &str,
    ) -> ApplicationResult<CommentList> {
        let article = load_article_by_slug(self.article_repo.as_ref(), slug).await?;
        if article.comment_ids.is_empty() {
            return Ok(CommentList {
                comments: Vec::new(),
            });
        }

        let mut comments = self.comment_repo.find_by_ids(&article.comment_ids).await?;
        let referenced = comments.len();
        comments.retain(|c| c.belongs_to(article.id));
        if comments.len() != referenced {
            tracing::debug!(
                article = %article.slug,
                skipped = referenced - comments.len(),
                "ignoring comments attached to another article"
            );
        }
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let comments = self.authors.render_comments(&comments, viewer).await?;
        Ok(CommentList { comments })
    }
}
