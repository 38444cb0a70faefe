// src/domain/article/filter.rs
use crate::domain::article::{entity::Article, value_objects::ArticleId};
use crate::domain::user::UserId;
use std::collections::BTreeSet;

/// Predicate over the article store. Every constraint that is set must hold;
/// an unset constraint matches everything.
///
/// Author and id restrictions compose by intersection: restricting twice can
/// only narrow the result, and restricting to an empty set yields a filter
/// that matches no article at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    tag: Option<String>,
    authors: Option<BTreeSet<UserId>>,
    ids: Option<BTreeSet<ArticleId>>,
}

impl ArticleFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter no article satisfies.
    pub fn none() -> Self {
        Self::default().restrict_to_ids(std::iter::empty())
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_author(self, author: UserId) -> Self {
        self.with_authors([author])
    }

    pub fn with_authors(mut self, authors: impl IntoIterator<Item = UserId>) -> Self {
        let incoming: BTreeSet<UserId> = authors.into_iter().collect();
        self.authors = Some(match self.authors.take() {
            Some(existing) => existing.intersection(&incoming).copied().collect(),
            None => incoming,
        });
        self
    }

    pub fn restrict_to_ids(mut self, ids: impl IntoIterator<Item = ArticleId>) -> Self {
        let incoming: BTreeSet<ArticleId> = ids.into_iter().collect();
        self.ids = Some(match self.ids.take() {
            Some(existing) => existing.intersection(&incoming).copied().collect(),
            None => incoming,
        });
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn authors(&self) -> Option<&BTreeSet<UserId>> {
        self.authors.as_ref()
    }

    pub fn ids(&self) -> Option<&BTreeSet<ArticleId>> {
        self.ids.as_ref()
    }

    /// True when some restriction is an empty set, so the store can be skipped.
    pub fn matches_nothing(&self) -> bool {
        self.authors.as_ref().is_some_and(BTreeSet::is_empty)
            || self.ids.as_ref().is_some_and(BTreeSet::is_empty)
    }

    pub fn matches(&self, article: &Article) -> bool {
        if let Some(tag) = &self.tag {
            if !article.tag_list.contains(tag) {
                return false;
            }
        }
        if let Some(authors) = &self.authors {
            if !authors.contains(&article.author_id) {
                return false;
            }
        }
        if let Some(ids) = &self.ids {
            if !ids.contains(&article.id) {
                return false;
            }
        }
        true
    }
}

/// Offset pagination over a result set ordered by creation time, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Pagination {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(limit: u32, offset: u32) -> Self {
        let limit = if limit == 0 {
            Self::DEFAULT_LIMIT
        } else {
            limit.min(Self::MAX_LIMIT)
        };
        Self { limit, offset }
    }

    /// Coerces raw query-string values. Anything that is not a non-negative
    /// integer falls back to the default. A limit of 0 also falls back to
    /// [`Self::DEFAULT_LIMIT`], and a limit above [`Self::MAX_LIMIT`] is
    /// silently capped to it.
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(Self::DEFAULT_LIMIT);
        let offset = offset
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(0);
        Self::new(limit, offset)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, 0)
    }
}
