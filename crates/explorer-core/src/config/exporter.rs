//! Query exporter endpoint configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the external CSV export service.
///
/// The hosting SQL tool exposes query results as a CSV download; this
/// module only fetches the byte stream, it never runs queries itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Base URL of the export endpoint.
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    300
}
