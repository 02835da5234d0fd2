//! Query repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_entity::query::model::Query;
use explorer_entity::query::store::QueryStore;

/// Repository for stored query definitions. Read-only from the task
/// layer's perspective; the hosting tool owns the rows.
#[derive(Debug, Clone)]
pub struct QueryRepository {
    pool: PgPool,
}

impl QueryRepository {
    /// Create a new query repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryStore for QueryRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Query>> {
        sqlx::query_as::<_, Query>("SELECT * FROM queries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find query", e))
    }

    async fn snapshot_ids(&self) -> AppResult<Vec<i64>> {
        sqlx::query_scalar::<_, i64>(
            "SELECT id FROM queries WHERE snapshot = TRUE ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list snapshot queries", e)
        })
    }
}
