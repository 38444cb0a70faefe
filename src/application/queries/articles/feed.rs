use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleList, error::ApplicationResult, identity::Identity},
    domain::{
        article::{ArticleFilter, Pagination},
        user::User,
    },
};

#[derive(Debug, Clone, Default)]
pub struct FeedQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ArticleQueryService {
    /// Articles written by the users `reader` follows. An empty following set
    /// is an empty feed.
    pub async fn feed(&self, reader: User, query: FeedQuery) -> ApplicationResult<ArticleList> {
        let page = Pagination::from_raw(query.limit.as_deref(), query.offset.as_deref());
        let filter = ArticleFilter::all().with_authors(reader.following.iter().copied());
        let viewer = Identity::Authenticated(reader);
        self.fetch_page(&filter, page, &viewer).await
    }
}
