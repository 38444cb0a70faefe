use std::sync::Arc;

use crate::application::{
    dto::{ArticleView, CommentView},
    error::{ApplicationError, ApplicationResult},
    identity::Identity,
    views::{self, AuthorIndex},
};
use crate::domain::{
    article::Article,
    comment::Comment,
    user::{User, UserId, UserRepository},
};

/// Loads the authors an entity list refers to and hands everything to the
/// pure renderers in `views`.
pub struct AuthorLoader {
    user_repo: Arc<dyn UserRepository>,
}

impl AuthorLoader {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn load_one(&self, id: UserId) -> ApplicationResult<User> {
        self.user_repo.find_by_id(id).await?.ok_or_else(|| {
            ApplicationError::infrastructure(format!("author {id} missing from user store"))
        })
    }

    pub async fn load_many(&self, ids: impl IntoIterator<Item = UserId>) -> ApplicationResult<AuthorIndex> {
        let mut ids: Vec<UserId> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(AuthorIndex::new(Vec::new()));
        }
        let users = self.user_repo.find_by_ids(&ids).await?;
        Ok(AuthorIndex::new(users))
    }

    pub async fn render_article(
        &self,
        article: &Article,
        viewer: &Identity,
    ) -> ApplicationResult<ArticleView> {
        let author = match viewer.user() {
            Some(me) if me.id == article.author_id => me.clone(),
            _ => self.load_one(article.author_id).await?,
        };
        Ok(views::render_article(article, &author, viewer))
    }

    pub async fn render_articles(
        &self,
        articles: &[Article],
        viewer: &Identity,
    ) -> ApplicationResult<Vec<ArticleView>> {
        let authors = self.load_many(articles.iter().map(|a| a.author_id)).await?;
        articles
            .iter()
            .map(|article| {
                authors
                    .get(article.author_id)
                    .map(|author| views::render_article(article, author, viewer))
            })
            .collect()
    }

    pub async fn render_comments(
        &self,
        comments: &[Comment],
        viewer: &Identity,
    ) -> ApplicationResult<Vec<CommentView>> {
        let authors = self.load_many(comments.iter().map(|c| c.author_id)).await?;
        comments
            .iter()
            .map(|comment| {
                authors
                    .get(comment.author_id)
                    .map(|author| views::render_comment(comment, author, viewer))
            })
            .collect()
    }
}
