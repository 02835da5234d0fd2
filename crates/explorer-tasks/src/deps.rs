//! Shared dependency bundle for the task entry points.

use std::sync::Arc;

use explorer_core::traits::{Mailer, QueryExporter, ReportStore};
use explorer_entity::query::store::{QueryLogStore, QueryStore};

/// The external services every task runs against.
///
/// All fields are trait objects so tests can substitute in-memory fakes
/// for the database, exporter, store, and mailer.
#[derive(Debug, Clone)]
pub struct TaskDeps {
    /// Stored query definitions.
    pub queries: Arc<dyn QueryStore>,
    /// Query execution logs.
    pub query_logs: Arc<dyn QueryLogStore>,
    /// The external CSV export service.
    pub exporter: Arc<dyn QueryExporter>,
    /// The object-storage bucket for exported reports.
    pub store: Arc<dyn ReportStore>,
    /// Outbound notification mail.
    pub mailer: Arc<dyn Mailer>,
}
