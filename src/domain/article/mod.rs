pub mod entity;
pub mod filter;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use filter::{ArticleFilter, Pagination};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, FavoriteRepository};
pub use value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, TagList,
};
