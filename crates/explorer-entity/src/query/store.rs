//! Store traits through which the task layer reads queries and prunes logs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use explorer_core::result::AppResult;

use super::model::Query;

/// Read access to stored query definitions.
///
/// Implemented by `QueryRepository` in `explorer-database`.
#[async_trait]
pub trait QueryStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a query by its primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Query>>;

    /// Return the ids of all queries flagged for snapshot capture.
    async fn snapshot_ids(&self) -> AppResult<Vec<i64>>;
}

/// Age-based pruning of query execution logs.
///
/// Implemented by `QueryLogRepository` in `explorer-database`.
#[async_trait]
pub trait QueryLogStore: Send + Sync + std::fmt::Debug + 'static {
    /// Count log rows with `run_at` strictly before the cutoff.
    async fn count_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<i64>;

    /// Delete log rows with `run_at` strictly before the cutoff.
    /// Returns the number of rows deleted.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64>;
}
