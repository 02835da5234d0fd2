//! Task queue repository implementation.
//!
//! Enqueue-only: rows inserted here are claimed and executed by the
//! external worker fleet. Claiming, retries, and status transitions are
//! the consumers' concern, not this module's.

use sqlx::PgPool;
use uuid::Uuid;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_entity::task::request::TaskRequest;

/// Repository for handing task requests to the external queue.
#[derive(Debug, Clone)]
pub struct TaskQueueRepository {
    pool: PgPool,
}

impl TaskQueueRepository {
    /// Create a new task queue repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a pending task row and return its id.
    pub async fn enqueue(&self, request: &TaskRequest) -> AppResult<Uuid> {
        let payload = serde_json::to_value(request)?;

        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO task_queue (task_type, payload) VALUES ($1, $2) RETURNING id",
        )
        .bind(request.task_type())
        .bind(payload)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to enqueue task", e))
    }
}
