//! SQL Explorer worker — periodic snapshot and log-pruning daemon.
//!
//! Main entry point that wires the crates together: loads configuration,
//! connects the database, runs migrations, builds the task dependencies
//! and dispatcher, and runs the cron scheduler until shutdown.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_database::DatabasePool;
use explorer_exporter::HttpQueryExporter;
use explorer_mail::SmtpMailer;
use explorer_storage::S3ReportStore;
use explorer_tasks::{
    InlineDispatcher, QueuedDispatcher, TaskDeps, TaskDispatcher, TaskScheduler,
};

#[tokio::main]
async fn main() {
    let env = std::env::var("EXPLORER_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Worker error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main worker run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SQL Explorer worker v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;
    explorer_database::migration::run_migrations(db.pool()).await?;

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
        tracing::info!("Task dispatch mode: queued");
        Arc::new(QueuedDispatcher::new(
            explorer_database::repositories::TaskQueueRepository::new(pool),
        ))
    } else {
        tracing::info!("Task dispatch mode: inline");
        Arc::new(InlineDispatcher::new(Arc::clone(&deps)))
    };

    let mut scheduler = TaskScheduler::new(dispatcher, config.tasks.clone()).await?;
    scheduler.register_default_tasks().await?;
    scheduler.start().await?;

    tracing::info!("Worker running; press Ctrl-C to stop");
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::internal(format!("Failed to listen for shutdown signal: {e}")))?;

    tracing::info!("Shutdown signal received");
    scheduler.shutdown().await?;
    db.close().await;
    Ok(())
}
