use std::sync::Arc;

use crate::{
    application::{dto::TagsDto, error::ApplicationResult},
    domain::article::ArticleReadRepository,
};

pub struct TagQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl TagQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_tags(&self) -> ApplicationResult<TagsDto> {
        let mut tags = self.read_repo.list_tags().await?;
        tags.sort();
        tags.dedup();
        Ok(TagsDto { tags })
    }
}
