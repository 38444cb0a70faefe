// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

pub trait SlugGenerator: Send + Sync {
    /// Produces a URL-safe slug for `input`. Implementations append a
    /// disambiguator; uniqueness itself is enforced by the store.
    fn slugify(&self, input: &str) -> String;
}

/// Domain service responsible for deriving article slugs from titles.
pub struct ArticleSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn slug_for(&self, title: &ArticleTitle, now: DateTime<Utc>) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        if base.trim().is_empty() {
            return ArticleSlug::new(format!("article-{}", now.timestamp()));
        }
        ArticleSlug::new(base)
    }
}
