//! S3-compatible report store.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use explorer_core::config::S3Config;
use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::traits::store::ReportStore;

/// Report store backed by an S3-compatible bucket.
#[derive(Debug, Clone)]
pub struct S3ReportStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    presign_expiry: Duration,
}

impl S3ReportStore {
    /// Create a new S3 report store from configuration.
    pub async fn new(config: &S3Config) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("storage.s3.bucket is not set"));
        }

        tracing::info!(
            endpoint = %config.endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 report store"
        );

        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "explorer-config",
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials);
        if !config.endpoint.is_empty() {
            loader = loader.endpoint_url(&config.endpoint);
        }
        let shared = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if !config.endpoint.is_empty() {
            // MinIO and friends do not support virtual-hosted bucket URLs.
            builder = builder.force_path_style(true);
        }
        let client = aws_sdk_s3::Client::from_conf(builder.build());

        Ok(Self {
            client,
            bucket: config.bucket.clone(),
            presign_expiry: Duration::from_secs(config.presign_expiry_seconds),
        })
    }
}

#[async_trait]
impl ReportStore for S3ReportStore {
    async fn put(&self, key: &str, data: Bytes) -> AppResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to upload object '{key}'"),
                    e,
                )
            })?;
        Ok(())
    }

    async fn presign(&self, key: &str) -> AppResult<String> {
        let presigning = PresigningConfig::expires_in(self.presign_expiry).map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Invalid presign expiry", e)
        })?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to presign object '{key}'"),
                    e,
                )
            })?;

        Ok(presigned.uri().to_string())
    }
}
