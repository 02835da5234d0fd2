//! Report store trait for object-storage backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for the object-storage backend holding exported reports.
///
/// The [`ReportStore`] trait is defined here in `explorer-core` and
/// implemented in `explorer-storage` for S3-compatible services.
#[async_trait]
pub trait ReportStore: Send + Sync + std::fmt::Debug + 'static {
    /// Write the given bytes under `key`.
    async fn put(&self, key: &str, data: Bytes) -> AppResult<()>;

    /// Generate a presigned retrieval URL for the object at `key`.
    async fn presign(&self, key: &str) -> AppResult<String>;
}
