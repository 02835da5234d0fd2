//! Query execution log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A record of a past query execution, retained for audit/history and
/// subject to age-based pruning.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QueryLog {
    /// Unique log entry identifier.
    pub id: i64,
    /// The query this execution belonged to (None for ad-hoc SQL).
    pub query_id: Option<i64>,
    /// The SQL text as executed.
    pub sql: String,
    /// Execution duration in milliseconds (None if not recorded).
    pub duration_ms: Option<f64>,
    /// When the execution happened.
    pub run_at: DateTime<Utc>,
}
