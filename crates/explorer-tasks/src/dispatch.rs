//! Task dispatch seam: queued (external worker fleet) or inline.

use std::sync::Arc;

use async_trait::async_trait;

use explorer_core::result::AppResult;
use explorer_database::repositories::TaskQueueRepository;
use explorer_entity::task::request::TaskRequest;

use crate::deps::TaskDeps;
use crate::jobs;

/// Hands a [`TaskRequest`] off for execution.
///
/// The queued implementation inserts a row for the external queue; the
/// inline implementation runs the task synchronously in-process. Which one
/// is wired up is decided by the `tasks.enabled` configuration flag.
#[async_trait]
pub trait TaskDispatcher: Send + Sync + std::fmt::Debug + 'static {
    /// Dispatch a task request.
    async fn dispatch(&self, request: TaskRequest) -> AppResult<()>;
}

/// Dispatcher that enqueues requests for the external worker fleet.
///
/// Fire-and-forget: once the row is inserted, execution outcome is the
/// queue consumers' business.
#[derive(Debug, Clone)]
pub struct QueuedDispatcher {
    queue: TaskQueueRepository,
}

impl QueuedDispatcher {
    /// Create a new queued dispatcher.
    pub fn new(queue: TaskQueueRepository) -> Self {
        Self { queue }
    }
}

#[async_trait]
impl TaskDispatcher for QueuedDispatcher {
    async fn dispatch(&self, request: TaskRequest) -> AppResult<()> {
        let task_type = request.task_type();
        let id = self.queue.enqueue(&request).await?;
        tracing::debug!(%id, task_type, "Enqueued task");
        Ok(())
    }
}

/// Dispatcher that runs tasks synchronously in-process.
///
/// The fallback when no external queue is configured, and the mode tests
/// run under.
#[derive(Debug)]
pub struct InlineDispatcher {
    deps: Arc<TaskDeps>,
}

impl InlineDispatcher {
    /// Create a new inline dispatcher.
    pub fn new(deps: Arc<TaskDeps>) -> Self {
        Self { deps }
    }
}

#[async_trait]
impl TaskDispatcher for InlineDispatcher {
    async fn dispatch(&self, request: TaskRequest) -> AppResult<()> {
        tracing::debug!(task_type = request.task_type(), "Running task inline");
        match request {
            TaskRequest::ExecuteQuery { query_id, email } => {
                jobs::execute_query(&self.deps, query_id, &email).await?;
            }
            TaskRequest::SnapshotQuery { query_id } => {
                jobs::snapshot_query(&self.deps, query_id).await?;
            }
            TaskRequest::SnapshotQueries => {
                jobs::snapshot_queries(&self.deps, self).await?;
            }
            TaskRequest::TruncateQueryLogs { days } => {
                jobs::truncate_querylogs(&self.deps, days).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{self, TestHarness};

    #[tokio::test]
    async fn test_inline_snapshot_queries_runs_each_snapshot() {
        let h = TestHarness::new(vec![
            testutil::query(1, "a", true),
            testutil::query(2, "b", true),
            testutil::query(3, "c", false),
        ]);
        let dispatcher = InlineDispatcher::new(Arc::new(h.deps.clone()));

        dispatcher
            .dispatch(TaskRequest::SnapshotQueries)
            .await
            .unwrap();

        let puts = h.store.puts.lock().unwrap();
        assert_eq!(puts.len(), 2);
        assert!(puts[0].0.starts_with("query-1.snap-"));
        assert!(puts[1].0.starts_with("query-2.snap-"));
    }

    #[tokio::test]
    async fn test_inline_truncate_runs_delete() {
        let h = TestHarness::new(vec![]);
        h.query_logs.insert(testutil::log(1, 40));

        let dispatcher = InlineDispatcher::new(Arc::new(h.deps.clone()));
        dispatcher
            .dispatch(TaskRequest::TruncateQueryLogs { days: 30 })
            .await
            .unwrap();

        assert!(h.query_logs.logs.lock().unwrap().is_empty());
    }
}
