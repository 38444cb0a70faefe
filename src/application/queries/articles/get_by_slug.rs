use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleEnvelope,
        error::{ApplicationError, ApplicationResult},
        identity::Identity,
    },
    domain::article::{Article, ArticleReadRepository, ArticleSlug},
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

/// Shared precondition of every single-article operation.
pub async fn load_article_by_slug(
    read_repo: &dyn ArticleReadRepository,
    slug: &str,
) -> ApplicationResult<Article> {
    let not_found = || ApplicationError::not_found(format!("article '{slug}' not found"));
    let slug = ArticleSlug::new(slug).map_err(|_| not_found())?;
    read_repo.find_by_slug(&slug).await?.ok_or_else(not_found)
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        viewer: &Identity,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleEnvelope> {
        let article = load_article_by_slug(self.read_repo.as_ref(), &query.slug).await?;
        let article = self.authors.render_article(&article, viewer).await?;
        Ok(ArticleEnvelope { article })
    }
}
