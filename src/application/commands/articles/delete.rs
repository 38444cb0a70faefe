// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::user::User};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Removes the article, then every comment attached to it.
    pub async fn delete_article(
        &self,
        actor: &User,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_owned(actor, &command.slug).await?;

        self.write_repo.delete(article.id).await?;
        let removed = self.comment_repo.delete_by_article(article.id).await?;

        tracing::info!(article = %article.slug, comments = removed, "article deleted");
        Ok(())
    }
}
