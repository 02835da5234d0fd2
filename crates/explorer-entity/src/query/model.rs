//! Query entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored query definition.
///
/// Owned by the hosting SQL tool; the task layer only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Query {
    /// Unique query identifier.
    pub id: i64,
    /// Human-readable title, used in the report-ready email subject.
    pub title: String,
    /// The SQL text.
    pub sql: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Whether this query is flagged for periodic snapshot capture.
    pub snapshot: bool,
    /// When the query definition was created.
    pub created_at: DateTime<Utc>,
    /// When the query was last executed (None = never).
    pub last_run_at: Option<DateTime<Utc>>,
}
