use super::CommentCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        queries::articles::load_article_by_slug,
    },
    domain::{
        comment::{CanDeleteCommentSpec, CommentId},
        user::User,
    },
};

pub struct DeleteCommentCommand {
    pub slug: String,
    /// Raw path segment; anything that is not a comment id is `NotFound`.
    pub comment_id: String,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        actor: &User,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let article = load_article_by_slug(self.article_read.as_ref(), &command.slug).await?;

        let not_found = || ApplicationError::not_found("comment not found");
        let id: CommentId = command.comment_id.parse().map_err(|_| not_found())?;
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .filter(|c| c.belongs_to(article.id))
            .ok_or_else(not_found)?;

        if !CanDeleteCommentSpec::new(&comment, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may delete this comment",
            ));
        }

        // Both removals are attempted; the first failure wins.
        let unlinked = self.article_write.unlink_comment(article.id, comment.id).await;
        let deleted = self.comment_repo.delete(comment.id).await;

        if let Err(err) = &unlinked {
            tracing::warn!(comment = %comment.id, error = %err, "failed to detach comment from article");
        }
        if let Err(err) = &deleted {
            tracing::warn!(comment = %comment.id, error = %err, "failed to delete comment");
        }

        unlinked?;
        deleted?;
        Ok(())
    }
}
