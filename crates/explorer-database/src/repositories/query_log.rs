//! Query log repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_entity::query::store::QueryLogStore;

/// Repository for query execution logs. Rows are written by the hosting
/// tool's execution layer; this side only counts and bulk-deletes them.
#[derive(Debug, Clone)]
pub struct QueryLogRepository {
    pool: PgPool,
}

impl QueryLogRepository {
    /// Create a new query log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryLogStore for QueryLogRepository {
    async fn count_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM query_logs WHERE run_at < $1")
            .bind(cutoff)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count query logs", e)
            })
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM query_logs WHERE run_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete query logs", e)
            })?;
        Ok(result.rows_affected())
    }
}
