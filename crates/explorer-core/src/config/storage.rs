//! Object-storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// S3-compatible object storage configuration.
    #[serde(default)]
    pub s3: S3Config,
}

/// S3-compatible object storage configuration.
///
/// Exported reports and query snapshots are written to this bucket, and
/// download links are presigned `get_object` URLs against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    /// S3 endpoint URL (for non-AWS services like MinIO; empty = AWS).
    #[serde(default)]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// S3 bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Lifetime of presigned download URLs in seconds.
    ///
    /// SigV4 caps presigned URLs at 7 days, which is also the default here.
    #[serde(default = "default_presign_expiry")]
    pub presign_expiry_seconds: u64,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            region: default_region(),
            bucket: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            presign_expiry_seconds: default_presign_expiry(),
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_presign_expiry() -> u64 {
    604_800 // 7 days
}
