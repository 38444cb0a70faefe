// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        queries::articles::load_article_by_slug,
        services::AuthorLoader,
    },
    domain::{
        article::{
            Article, ArticleReadRepository, ArticleWriteRepository,
            services::ArticleSlugService,
            specifications::{ArticleSpecification, CanModifyArticleSpec},
        },
        comment::CommentRepository,
        user::User,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) authors: Arc<AuthorLoader>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        slug_service: Arc<ArticleSlugService>,
        authors: Arc<AuthorLoader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            comment_repo,
            slug_service,
            authors,
            clock,
        }
    }

    /// Loads the article behind `slug` and checks that `actor` owns it.
    pub(super) async fn load_owned(&self, actor: &User, slug: &str) -> ApplicationResult<Article> {
        let article = load_article_by_slug(self.read_repo.as_ref(), slug).await?;
        if !CanModifyArticleSpec::new(&article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may modify this article",
            ));
        }
        Ok(article)
    }
}
