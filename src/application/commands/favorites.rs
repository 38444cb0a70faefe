// src/application/commands/favorites.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleEnvelope, error::ApplicationResult, identity::Identity,
        queries::articles::load_article_by_slug, services::AuthorLoader,
    },
    domain::{
        article::{Article, ArticleReadRepository, ArticleWriteRepository, FavoriteRepository},
        user::User,
    },
};

/// Owns the favorites relation and the cached `favorites_count` on articles.
pub struct FavoriteCommandService {
    read_repo: Arc<dyn ArticleReadRepository>,
    write_repo: Arc<dyn ArticleWriteRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,
    authors: Arc<AuthorLoader>,
}

impl FavoriteCommandService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        authors: Arc<AuthorLoader>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            favorite_repo,
            authors,
        }
    }

    pub async fn favorite(&self, mut user: User, slug: &str) -> ApplicationResult<ArticleEnvelope> {
        let article = load_article_by_slug(self.read_repo.as_ref(), slug).await?;
        self.favorite_repo.add(user.id, article.id).await?;
        user.favorite(article.id);

        let refreshed = self.recompute_count(&article).await?;
        self.render_for(user, &refreshed).await
    }

    pub async fn unfavorite(
        &self,
        mut user: User,
        slug: &str,
    ) -> ApplicationResult<ArticleEnvelope> {
        let article = load_article_by_slug(self.read_repo.as_ref(), slug).await?;
        self.favorite_repo.remove(user.id, article.id).await?;
        user.unfavorite(article.id);

        let refreshed = self.recompute_count(&article).await?;
        self.render_for(user, &refreshed).await
    }

    /// Recounts favoriting users and writes the result onto the article.
    /// The counter is never adjusted in place.
    pub async fn recompute_count(&self, article: &Article) -> ApplicationResult<Article> {
        let count = self.favorite_repo.count_for_article(article.id).await?;
        if count != article.favorites_count {
            tracing::debug!(
                article = %article.slug,
                stored = article.favorites_count,
                count,
                "favorites count changed"
            );
        }
        Ok(self.write_repo.set_favorites_count(article.id, count).await?)
    }

    async fn render_for(&self, user: User, article: &Article) -> ApplicationResult<ArticleEnvelope> {
        let viewer = Identity::Authenticated(user);
        let article = self.authors.render_article(article, &viewer).await?;
        Ok(ArticleEnvelope { article })
    }
}
