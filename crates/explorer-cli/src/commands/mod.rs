//! CLI command definitions and dispatch.

pub mod migrate;
pub mod tasks;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_database::DatabasePool;
use explorer_exporter::HttpQueryExporter;
use explorer_mail::SmtpMailer;
use explorer_storage::S3ReportStore;
use explorer_tasks::{InlineDispatcher, QueuedDispatcher, TaskDeps, TaskDispatcher, TaskService};

/// SQL Explorer — background task invocation
#[derive(Debug, Parser)]
#[command(name = "explorer", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment overlay (config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run database migrations
    Migrate,
    /// Run a query, upload the CSV, and email a download link
    ExecuteQuery(tasks::ExecuteQueryArgs),
    /// Snapshot a single query
    SnapshotQuery(tasks::SnapshotQueryArgs),
    /// Dispatch snapshot tasks for all flagged queries
    SnapshotQueries,
    /// Delete query logs older than a day threshold
    TruncateQuerylogs(tasks::TruncateQuerylogsArgs),
}

impl Cli {
    /// Execute the selected command.
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;

        match &self.command {
            Commands::Migrate => migrate::execute(&config).await,
            Commands::ExecuteQuery(args) => {
                let service = build_service(&config).await?;
                tasks::execute_query(&service, args).await
            }
            Commands::SnapshotQuery(args) => {
                let service = build_service(&config).await?;
                tasks::snapshot_query(&service, args).await
            }
            Commands::SnapshotQueries => {
                let service = build_service(&config).await?;
                tasks::snapshot_queries(&service).await
            }
            Commands::TruncateQuerylogs(args) => {
                let service = build_service(&config).await?;
                tasks::truncate_querylogs(&service, args).await
            }
        }
    }
}

/// Wire the task service from configuration: pool, repositories, external
/// service clients, and the dispatcher selected by `tasks.enabled`.
pub async fn build_service(config: &AppConfig) -> Result<TaskService, AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    let pool = db.pool().clone();

    let deps = Arc::new(TaskDeps {
        queries: Arc::new(explorer_database::repositories::QueryRepository::new(
            pool.clone(),
        )),
        query_logs: Arc::new(explorer_database::repositories::QueryLogRepository::new(
            pool.clone(),
        )),
        exporter: Arc::new(HttpQueryExporter::new(&config.exporter)?),
        store: Arc::new(S3ReportStore::new(&config.storage.s3).await?),
        mailer: Arc::new(SmtpMailer::new(&config.mail)?),
    });

    let dispatcher: Arc<dyn TaskDispatcher> = if config.tasks.enabled {
        Arc::new(QueuedDispatcher::new(
            explorer_database::repositories::TaskQueueRepository::new(pool),
        ))
    } else {
        Arc::new(InlineDispatcher::new(Arc::clone(&deps)))
    };

    Ok(TaskService::new(deps, dispatcher))
}
