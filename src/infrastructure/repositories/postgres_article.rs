// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleDescription, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleSlug, ArticleTitle, ArticleUpdate, ArticleWriteRepository, FavoriteRepository,
    NewArticle, Pagination, TagList,
};
use crate::domain::comment::CommentId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, slug, title, description, body, tag_list, author_id, \
     favorites_count, comment_ids, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresFavoriteRepository {
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    tag_list: Vec<String>,
    author_id: i64,
    favorites_count: i64,
    comment_ids: Vec<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let favorites_count = u64::try_from(row.favorites_count).map_err(|_| {
            DomainError::Persistence(format!(
                "article {} has a negative favorites count",
                row.id
            ))
        })?;

        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description),
            body: ArticleBody::new(row.body)?,
            tag_list: TagList::new(row.tag_list),
            author_id: UserId::new(row.author_id)?,
            favorites_count,
            comment_ids: row
                .comment_ids
                .into_iter()
                .map(CommentId::new)
                .collect::<Result<Vec<_>, _>>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn to_count(raw: i64) -> DomainResult<u64> {
    u64::try_from(raw).map_err(|_| DomainError::Persistence(format!("negative row count {raw}")))
}

fn not_found(id: ArticleId) -> DomainError {
    DomainError::NotFound(format!("article {} not found", i64::from(id)))
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            title,
            description,
            body,
            tag_list,
            author_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (slug, title, description, body, tag_list, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(slug.into_inner())
        .bind(title.into_inner())
        .bind(description.into_inner())
        .bind(body.into_inner())
        .bind(tag_list.into_inner())
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            description,
            body,
            tag_list,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.into_inner());
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }

        if let Some(tag_list) = tag_list {
            builder.push(", tag_list = ");
            builder.push_bind(tag_list.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| not_found(id))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn set_favorites_count(&self, id: ArticleId, count: u64) -> DomainResult<Article> {
        let count = i64::try_from(count)
            .map_err(|_| DomainError::Validation("favorites count out of range".into()))?;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET favorites_count = $1 WHERE id = $2 RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(count)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| not_found(id))?;

        Article::try_from(row)
    }

    async fn link_comment(&self, id: ArticleId, comment_id: CommentId) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles SET comment_ids = array_append(comment_ids, $1) WHERE id = $2",
        )
        .bind(i64::from(comment_id))
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn unlink_comment(&self, id: ArticleId, comment_id: CommentId) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles SET comment_ids = array_remove(comment_ids, $1) WHERE id = $2",
        )
        .bind(i64::from(comment_id))
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn push_clause(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
        builder.push(if *has_where { " AND " } else { " WHERE " });
        *has_where = true;
    }

    /// Renders every set restriction of `filter` as a conjunct. `list` and
    /// `count` share this so the total always matches the listed predicate.
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        let mut has_where = false;

        if let Some(tag) = filter.tag() {
            Self::push_clause(builder, &mut has_where);
            builder.push("tag_list @> ARRAY[");
            builder.push_bind(tag.to_string());
            builder.push("]::TEXT[]");
        }

        if let Some(authors) = filter.authors() {
            let ids: Vec<i64> = authors.iter().copied().map(i64::from).collect();
            Self::push_clause(builder, &mut has_where);
            builder.push("author_id = ANY(");
            builder.push_bind(ids);
            builder.push(")");
        }

        if let Some(ids) = filter.ids() {
            let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
            Self::push_clause(builder, &mut has_where);
            builder.push("id = ANY(");
            builder.push_bind(ids);
            builder.push(")");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, filter: &ArticleFilter, page: Pagination) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM articles");
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(page.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(page.offset));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(1) FROM articles");
        Self::apply_filter(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        to_count(count)
    }

    async fn list_tags(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT tag FROM articles, unnest(tag_list) AS tag ORDER BY tag",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}

#[async_trait]
impl FavoriteRepository for PostgresFavoriteRepository {
    async fn add(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO favorites (user_id, article_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn remove(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND article_id = $2")
            .bind(i64::from(user_id))
            .bind(i64::from(article_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM favorites WHERE article_id = $1")
            .bind(i64::from(article_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
            .and_then(to_count)
    }
}
