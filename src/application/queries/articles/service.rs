use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleList, error::ApplicationResult, identity::Identity,
        services::AuthorLoader,
    },
    domain::{
        article::{ArticleFilter, ArticleReadRepository, Pagination},
        user::UserRepository,
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) authors: Arc<AuthorLoader>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        authors: Arc<AuthorLoader>,
    ) -> Self {
        Self {
            read_repo,
            user_repo,
            authors,
        }
    }

    /// Fetches one page and the total under the same predicate, so the count
    /// never drifts from what pagination walks over.
    pub(super) async fn fetch_page(
        &self,
        filter: &ArticleFilter,
        page: Pagination,
        viewer: &Identity,
    ) -> ApplicationResult<ArticleList> {
        if filter.matches_nothing() {
            return Ok(ArticleList::empty());
        }

        let (records, total) = tokio::try_join!(
            self.read_repo.list(filter, page),
            self.read_repo.count(filter),
        )?;

        let articles = self.authors.render_articles(&records, viewer).await?;
        Ok(ArticleList {
            articles,
            articles_count: total,
        })
    }
}
