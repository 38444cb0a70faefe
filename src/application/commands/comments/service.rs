use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::CommentRepository,
    },
};

pub struct CommentCommandService {
    pub(super) article_read: Arc<dyn ArticleReadRepository>,
    pub(super) article_write: Arc<dyn ArticleWriteRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        article_read: Arc<dyn ArticleReadRepository>,
        article_write: Arc<dyn ArticleWriteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_read,
            article_write,
            comment_repo,
            clock,
        }
    }
}
