//! The serializable task envelope handed to the dispatcher.

use serde::{Deserialize, Serialize};

/// A request to run one of the task entry points.
///
/// Serialized as the queue payload when tasks are handed to the external
/// queue; the `task` tag doubles as the queue's task-type discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum TaskRequest {
    /// Export a query to CSV, upload it, and email a download link.
    ExecuteQuery {
        /// The query to run.
        query_id: i64,
        /// Destination address for the report-ready email.
        email: String,
    },
    /// Export a query to CSV and upload it under a deterministic key.
    SnapshotQuery {
        /// The query to snapshot.
        query_id: i64,
    },
    /// Dispatch one `SnapshotQuery` per query flagged for snapshots.
    SnapshotQueries,
    /// Delete query logs older than the given number of days.
    #[serde(rename = "truncate_querylogs")]
    TruncateQueryLogs {
        /// Age threshold in days.
        days: i64,
    },
}

impl TaskRequest {
    /// The queue task-type string for this request.
    pub fn task_type(&self) -> &'static str {
        match self {
            Self::ExecuteQuery { .. } => "execute_query",
            Self::SnapshotQuery { .. } => "snapshot_query",
            Self::SnapshotQueries => "snapshot_queries",
            Self::TruncateQueryLogs { .. } => "truncate_querylogs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_tags_are_stable() {
        let req = TaskRequest::SnapshotQuery { query_id: 7 };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["task"], "snapshot_query");
        assert_eq!(json["query_id"], 7);

        let back: TaskRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, req);

        // The queue name has no underscore between "query" and "logs".
        let req = TaskRequest::TruncateQueryLogs { days: 30 };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["task"], "truncate_querylogs");
    }

    #[test]
    fn test_task_type_matches_serde_tag() {
        let reqs = [
            TaskRequest::ExecuteQuery {
                query_id: 1,
                email: "a@b.c".to_string(),
            },
            TaskRequest::SnapshotQuery { query_id: 1 },
            TaskRequest::SnapshotQueries,
            TaskRequest::TruncateQueryLogs { days: 30 },
        ];
        for req in reqs {
            let json = serde_json::to_value(&req).unwrap();
            assert_eq!(json["task"], req.task_type());
        }
    }
}
