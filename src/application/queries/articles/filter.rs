// src/application/queries/articles/filter.rs
use super::{ArticleQueryService, ListArticlesQuery};
use crate::{
    application::error::ApplicationResult,
    domain::{
        article::{ArticleFilter, Pagination},
        user::{User, Username},
    },
};

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl ArticleQueryService {
    /// Normalises raw listing parameters into a store predicate.
    ///
    /// Unknown `author` or `favorited` usernames are not errors: they restrict
    /// the result to the empty set. Both lookups run concurrently.
    pub async fn build_filter(
        &self,
        query: &ListArticlesQuery,
    ) -> ApplicationResult<(ArticleFilter, Pagination)> {
        let page = Pagination::from_raw(query.limit.as_deref(), query.offset.as_deref());

        let tag = non_blank(query.tag.as_deref());
        let author_name = non_blank(query.author.as_deref());
        let favoriter_name = non_blank(query.favorited.as_deref());

        let (author, favoriter) = tokio::try_join!(
            self.resolve_username(author_name),
            self.resolve_username(favoriter_name),
        )?;

        let mut filter = ArticleFilter::all();

        if let Some(tag) = tag {
            filter = filter.with_tag(tag);
        }

        if author_name.is_some() {
            filter = match author {
                Some(user) => filter.with_author(user.id),
                None => filter.restrict_to_ids(std::iter::empty()),
            };
        }

        if favoriter_name.is_some() {
            filter = match favoriter {
                Some(user) => filter.restrict_to_ids(user.favorites.iter().copied()),
                None => filter.restrict_to_ids(std::iter::empty()),
            };
        }

        Ok((filter, page))
    }

    async fn resolve_username(&self, name: Option<&str>) -> ApplicationResult<Option<User>> {
        let Some(name) = name else {
            return Ok(None);
        };
        // A name that fails validation cannot belong to anyone.
        let Ok(username) = Username::new(name) else {
            return Ok(None);
        };
        Ok(self.user_repo.find_by_username(&username).await?)
    }
}
