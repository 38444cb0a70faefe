// src/application/services/mod.rs
mod authors;

use std::sync::Arc;

pub use authors::AuthorLoader;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            favorites::FavoriteCommandService, profiles::ProfileCommandService,
            users::UserCommandService,
        },
        identity::IdentityResolver,
        ports::{ClockPort, PasswordHasherPort, SlugGeneratorPort, TokenManagerPort},
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            profiles::ProfileQueryService, tags::TagQueryService,
        },
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository, FavoriteRepository,
            services::ArticleSlugService,
        },
        comment::CommentRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub identity: Arc<IdentityResolver>,
    pub user_commands: Arc<UserCommandService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub favorite_commands: Arc<FavoriteCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub tag_queries: Arc<TagQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        token_manager: Arc<TokenManagerPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let identity = Arc::new(IdentityResolver::new(
            Arc::clone(&token_manager),
            Arc::clone(&user_repo),
        ));
        let authors = Arc::new(AuthorLoader::new(Arc::clone(&user_repo)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            password_hasher,
            token_manager,
            Arc::clone(&clock),
        ));
        let profile_commands = Arc::new(ProfileCommandService::new(Arc::clone(&user_repo)));
        let profile_queries = Arc::new(ProfileQueryService::new(Arc::clone(&user_repo)));

        let slug_service = Arc::new(ArticleSlugService::new(slugger));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&comment_repo),
            slug_service,
            Arc::clone(&authors),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&authors),
        ));

        let favorite_commands = Arc::new(FavoriteCommandService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&article_write_repo),
            favorite_repo,
            Arc::clone(&authors),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&article_read_repo),
            article_write_repo,
            Arc::clone(&comment_repo),
            clock,
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&article_read_repo),
            comment_repo,
            authors,
        ));

        let tag_queries = Arc::new(TagQueryService::new(article_read_repo));

        Self {
            identity,
            user_commands,
            profile_commands,
            profile_queries,
            article_commands,
            article_queries,
            favorite_commands,
            comment_commands,
            comment_queries,
            tag_queries,
        }
    }
}
