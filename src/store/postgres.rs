//! `BookStore` over a sqlx PostgreSQL pool.

use super::BookStore;
use crate::config::AppConfig;
use crate::error::{AppError, ConfigError};
use crate::model::{Book, BookInput};
use crate::sql::BookQueries;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
    queries: BookQueries,
}

impl PgBookStore {
    /// `table` is `name` or `schema.name`; it must already exist.
    pub fn new(pool: PgPool, table: &str) -> Result<Self, ConfigError> {
        Ok(PgBookStore {
            pool,
            queries: BookQueries::for_table(table)?,
        })
    }

    /// Open a pool sized from `config` and ping it once; fails if the database is unreachable.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await?;
        let store = Self::new(pool, &config.books_table)?;
        store.ping().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let sql = &self.queries.select_all;
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Book>(sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn create(&self, input: &BookInput) -> Result<Book, AppError> {
        let sql = &self.queries.insert;
        tracing::debug!(sql = %sql, "query");
        let book = sqlx::query_as::<_, Book>(sql)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.description)
            .fetch_one(&self.pool)
            .await?;
        Ok(book)
    }

    async fn read(&self, id: i32) -> Result<Option<Book>, AppError> {
        let sql = &self.queries.select_by_id;
        tracing::debug!(sql = %sql, id, "query");
        let book = sqlx::query_as::<_, Book>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    async fn update(&self, id: i32, input: &BookInput) -> Result<u64, AppError> {
        let sql = &self.queries.update;
        tracing::debug!(sql = %sql, id, "execute");
        let result = sqlx::query(sql)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.description)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let sql = &self.queries.delete;
        tracing::debug!(sql = %sql, id, "execute");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
