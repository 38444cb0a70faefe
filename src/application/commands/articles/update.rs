use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleEnvelope, error::ApplicationResult, identity::Identity},
    domain::{
        article::{ArticleBody, ArticleDescription, ArticleTitle, ArticleUpdate, TagList},
        user::User,
    },
};

/// Fields left as `None` keep their stored value.
#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: User,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleEnvelope> {
        let article = self.load_owned(&actor, &command.slug).await?;

        let UpdateArticleCommand {
            slug: _,
            title,
            description,
            body,
            tag_list,
        } = command;

        let mut update = ArticleUpdate::new(article.id, self.clock.now());
        if let Some(title) = title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(description) = description {
            update = update.with_description(ArticleDescription::new(description));
        }
        if let Some(body) = body {
            update = update.with_body(ArticleBody::new(body)?);
        }
        if let Some(tags) = tag_list {
            update = update.with_tag_list(TagList::new(tags));
        }

        let viewer = Identity::Authenticated(actor);
        if update.is_empty() {
            let article = self.authors.render_article(&article, &viewer).await?;
            return Ok(ArticleEnvelope { article });
        }

        let updated = self.write_repo.update(update).await?;
        let article = self.authors.render_article(&updated, &viewer).await?;
        Ok(ArticleEnvelope { article })
    }
}
