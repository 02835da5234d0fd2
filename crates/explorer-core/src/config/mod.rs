//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod database;
pub mod exporter;
pub mod logging;
pub mod mail;
pub mod storage;
pub mod tasks;

use serde::{Deserialize, Serialize};

pub use self::database::DatabaseConfig;
pub use self::exporter::ExporterConfig;
pub use self::logging::LoggingConfig;
pub use self::mail::MailConfig;
pub use self::storage::{S3Config, StorageConfig};
pub use self::tasks::TasksConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Object-storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Outbound mail settings.
    pub mail: MailConfig,
    /// Query exporter endpoint settings.
    pub exporter: ExporterConfig,
    /// Task dispatch and scheduling settings.
    #[serde(default)]
    pub tasks: TasksConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `EXPLORER`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("EXPLORER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
