// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleEnvelope, error::ApplicationResult, identity::Identity},
    domain::{
        article::{ArticleBody, ArticleDescription, ArticleTitle, NewArticle, TagList},
        user::User,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: Option<String>,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        author: User,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleEnvelope> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let description = ArticleDescription::new(command.description.unwrap_or_default());
        let tag_list = TagList::new(command.tag_list);
        let now = self.clock.now();

        let slug = self.slug_service.slug_for(&title, now)?;

        let new_article = NewArticle {
            slug,
            title,
            description,
            body,
            tag_list,
            author_id: author.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article = %created.slug, author = %author.id, "article created");

        let viewer = Identity::Authenticated(author);
        let article = self.authors.render_article(&created, &viewer).await?;
        Ok(ArticleEnvelope { article })
    }
}
