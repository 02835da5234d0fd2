//! HTTP client for the export endpoint of the hosting SQL tool.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use explorer_core::config::ExporterConfig;
use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::traits::exporter::QueryExporter;

/// Query exporter that downloads CSV output over HTTP.
#[derive(Debug, Clone)]
pub struct HttpQueryExporter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQueryExporter {
    /// Create a new HTTP exporter from configuration.
    pub fn new(config: &ExporterConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Export, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl QueryExporter for HttpQueryExporter {
    async fn export_csv(&self, query_id: i64) -> AppResult<Bytes> {
        let url = format!("{}/api/queries/{query_id}/export?format=csv", self.base_url);
        tracing::debug!(query_id, %url, "Fetching CSV export");

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Export,
                format!("Export request failed for query {query_id}"),
                e,
            )
        })?;

        let response = response.error_for_status().map_err(|e| {
            AppError::with_source(
                ErrorKind::Export,
                format!("Export endpoint returned an error for query {query_id}"),
                e,
            )
        })?;

        response.bytes().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Export,
                format!("Failed to read export body for query {query_id}"),
                e,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let exporter = HttpQueryExporter::new(&ExporterConfig {
            base_url: "http://localhost:8000/".to_string(),
            timeout_seconds: 5,
        })
        .unwrap();
        assert_eq!(exporter.base_url, "http://localhost:8000");
    }
}
