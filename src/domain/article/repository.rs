use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::filter::{ArticleFilter, Pagination};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::comment::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Overwrites the cached favorites counter and returns the refreshed article.
    async fn set_favorites_count(&self, id: ArticleId, count: u64) -> DomainResult<Article>;
    /// Appends to the comment-reference list in a single-document write.
    async fn link_comment(&self, id: ArticleId, comment_id: CommentId) -> DomainResult<()>;
    async fn unlink_comment(&self, id: ArticleId, comment_id: CommentId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Articles matching `filter`, newest first.
    async fn list(&self, filter: &ArticleFilter, page: Pagination) -> DomainResult<Vec<Article>>;
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;
    /// Distinct tags across all articles, sorted.
    async fn list_tags(&self) -> DomainResult<Vec<String>>;
}

/// The authoritative favorites relation between users and articles.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Adding an existing pair is a no-op.
    async fn add(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()>;
    async fn remove(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()>;
    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64>;
}
