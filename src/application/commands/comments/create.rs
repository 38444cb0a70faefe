// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentEnvelope, error::ApplicationResult, identity::Identity,
        queries::articles::load_article_by_slug, views,
    },
    domain::{
        comment::{CommentBody, NewComment},
        user::User,
    },
};

pub struct CreateCommentCommand {
    pub slug: String,
    pub body: String,
}

impl CommentCommandService {
    /// Persists the comment, then appends its id to the article. The two
    /// writes are sequential; if the second fails the comment stays stored
    /// but unreachable and the error is returned.
    pub async fn create_comment(
        &self,
        author: User,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentEnvelope> {
        let article = load_article_by_slug(self.article_read.as_ref(), &command.slug).await?;
        let body = CommentBody::new(command.body)?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                body,
                article_id: article.id,
                author_id: author.id,
                created_at: self.clock.now(),
            })
            .await?;

        if let Err(err) = self.article_write.link_comment(article.id, comment.id).await {
            tracing::warn!(
                article = %article.slug,
                comment = %comment.id,
                error = %err,
                "comment stored but not attached to article"
            );
            return Err(err.into());
        }

        let viewer = Identity::Authenticated(author.clone());
        let comment = views::render_comment(&comment, &author, &viewer);
        Ok(CommentEnvelope { comment })
    }
}
