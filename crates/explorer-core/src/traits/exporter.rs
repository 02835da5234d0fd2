//! Query exporter trait for the external CSV export service.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for the external component that converts a query's result set
/// into a CSV byte stream.
///
/// Query execution and CSV generation happen in the hosting SQL tool;
/// implementations of this trait only fetch the finished output.
#[async_trait]
pub trait QueryExporter: Send + Sync + std::fmt::Debug + 'static {
    /// Export the result set of the query with the given id as CSV bytes.
    async fn export_csv(&self, query_id: i64) -> AppResult<Bytes>;
}
