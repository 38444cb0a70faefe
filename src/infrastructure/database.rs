use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!(max_connections, "database pool ready");
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    const INIT: &str = include_str!("../../migrations/0001_init.sql");

    fn table(name: &str) -> &'static str {
        let start = INIT
            .find(&format!("CREATE TABLE IF NOT EXISTS {name} ("))
            .unwrap();
        let len = INIT[start..].find(");").unwrap();
        &INIT[start..start + len]
    }

    #[test]
    fn comments_do_not_cascade_from_articles() {
        let comments = table("comments");
        let article_ref = comments
            .lines()
            .find(|line| line.trim_start().starts_with("article_id"))
            .unwrap();
        assert!(!article_ref.contains("REFERENCES"));
        assert!(!article_ref.contains("CASCADE"));
    }

    #[test]
    fn favorites_still_cascade_from_articles() {
        let favorites = table("favorites");
        assert!(favorites.contains("article_id BIGINT NOT NULL REFERENCES articles(id) ON DELETE CASCADE"));
    }
}
