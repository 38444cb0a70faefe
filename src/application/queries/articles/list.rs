use super::ArticleQueryService;
use crate::application::{dto::ArticleList, error::ApplicationResult, identity::Identity};

/// Raw listing parameters as received from the query string.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        viewer: &Identity,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticleList> {
        let (filter, page) = self.build_filter(&query).await?;
        tracing::debug!(?filter, ?page, "listing articles");
        self.fetch_page(&filter, page, viewer).await
    }
}
