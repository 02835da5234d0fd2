//! Facade bundling the task entry points with a dispatcher.

use std::sync::Arc;

use explorer_core::result::AppResult;

use crate::deps::TaskDeps;
use crate::dispatch::TaskDispatcher;
use crate::jobs;

/// The task surface the binaries call into.
#[derive(Debug, Clone)]
pub struct TaskService {
    deps: Arc<TaskDeps>,
    dispatcher: Arc<dyn TaskDispatcher>,
}

impl TaskService {
    /// Create a new task service.
    pub fn new(deps: Arc<TaskDeps>, dispatcher: Arc<dyn TaskDispatcher>) -> Self {
        Self { deps, dispatcher }
    }

    /// See [`jobs::execute_query`]. Returns the presigned URL.
    pub async fn execute_query(&self, query_id: i64, email: &str) -> AppResult<String> {
        jobs::execute_query(&self.deps, query_id, email).await
    }

    /// See [`jobs::snapshot_query`]. Returns the object key.
    pub async fn snapshot_query(&self, query_id: i64) -> AppResult<String> {
        jobs::snapshot_query(&self.deps, query_id).await
    }

    /// See [`jobs::snapshot_queries`]. Returns the dispatched task count.
    pub async fn snapshot_queries(&self) -> AppResult<usize> {
        jobs::snapshot_queries(&self.deps, self.dispatcher.as_ref()).await
    }

    /// See [`jobs::truncate_querylogs`]. Returns the deleted row count.
    pub async fn truncate_querylogs(&self, days: i64) -> AppResult<u64> {
        jobs::truncate_querylogs(&self.deps, days).await
    }
}
