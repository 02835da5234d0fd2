//! Task dispatch and scheduling configuration.

use serde::{Deserialize, Serialize};

/// Background task configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Whether tasks are handed to the external queue. When false, tasks
    /// dispatched from `snapshot_queries` and the scheduler run inline.
    #[serde(default)]
    pub enabled: bool,
    /// Cron expression for the periodic snapshot sweep.
    #[serde(default = "default_snapshot_schedule")]
    pub snapshot_schedule: String,
    /// Cron expression for periodic query-log truncation.
    #[serde(default = "default_truncate_schedule")]
    pub truncate_schedule: String,
    /// Age threshold in days for query-log truncation.
    #[serde(default = "default_retention_days")]
    pub querylog_retention_days: i64,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            snapshot_schedule: default_snapshot_schedule(),
            truncate_schedule: default_truncate_schedule(),
            querylog_retention_days: default_retention_days(),
        }
    }
}

fn default_snapshot_schedule() -> String {
    // Daily at 05:00 UTC
    "0 0 5 * * *".to_string()
}

fn default_truncate_schedule() -> String {
    // Daily at 01:00 UTC
    "0 0 1 * * *".to_string()
}

fn default_retention_days() -> i64 {
    30
}
