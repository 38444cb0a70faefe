// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, User, UserId, UserRepository, UserUpdate, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Users are always loaded together with their following and favorites sets.
const USER_SELECT: &str = "SELECT u.id, u.username, u.email, u.password_hash, u.bio, u.image, u.created_at,
        ARRAY(SELECT f.followee_id FROM follows f WHERE f.follower_id = u.id) AS following,
        ARRAY(SELECT fav.article_id FROM favorites fav WHERE fav.user_id = u.id) AS favorites
     FROM users u";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(
        &self,
        column: &str,
        bind: impl FnOnce(&mut QueryBuilder<'_, Postgres>),
    ) -> DomainResult<Option<User>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(USER_SELECT);
        builder.push(" WHERE u.");
        builder.push(column);
        builder.push(" = ");
        bind(&mut builder);

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    bio: Option<String>,
    image: Option<String>,
    created_at: DateTime<Utc>,
    following: Vec<i64>,
    favorites: Vec<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            bio: row.bio,
            image: row.image,
            following: row
                .following
                .into_iter()
                .map(UserId::new)
                .collect::<Result<_, _>>()?,
            favorites: row
                .favorites
                .into_iter()
                .map(ArticleId::new)
                .collect::<Result<_, _>>()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            email,
            password_hash,
            created_at,
        } = new_user;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (username, email, password_hash, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(username.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let id = UserId::new(id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Persistence(format!("user {id} vanished after insert")))
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let not_found = || DomainError::NotFound(format!("user {} not found", update.id));
        if update.is_empty() {
            return self.find_by_id(update.id).await?.ok_or_else(not_found);
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        let mut assignments = builder.separated(", ");

        if let Some(username) = &update.username {
            assignments.push("username = ");
            assignments.push_bind_unseparated(username.as_str().to_string());
        }
        if let Some(email) = &update.email {
            assignments.push("email = ");
            assignments.push_bind_unseparated(email.as_str().to_string());
        }
        if let Some(password_hash) = &update.password_hash {
            assignments.push("password_hash = ");
            assignments.push_bind_unseparated(password_hash.as_str().to_string());
        }
        if let Some(bio) = &update.bio {
            assignments.push("bio = ");
            assignments.push_bind_unseparated(bio.clone());
        }
        if let Some(image) = &update.image {
            assignments.push("image = ");
            assignments.push_bind_unseparated(image.clone());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        self.find_by_id(update.id).await?.ok_or_else(not_found)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.fetch_one_where("id", |b| {
            b.push_bind(i64::from(id));
        })
        .await
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let username = username.as_str().to_string();
        self.fetch_one_where("username", |b| {
            b.push_bind(username);
        })
        .await
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let email = email.as_str().to_string();
        self.fetch_one_where("email", |b| {
            b.push_bind(email);
        })
        .await
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(USER_SELECT);
        builder.push(" WHERE u.id = ANY(");
        builder.push_bind(ids);
        builder.push(")");

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO follows (follower_id, followee_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(follower))
        .bind(i64::from(followee))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
            .bind(i64::from(follower))
            .bind(i64::from(followee))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
