//! Cron scheduler for the periodic snapshot sweep and log pruning.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};

use explorer_core::config::TasksConfig;
use explorer_core::error::AppError;
use explorer_entity::task::request::TaskRequest;

use crate::dispatch::TaskDispatcher;

/// Cron-based scheduler for the periodic background tasks.
pub struct TaskScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
    /// Dispatcher the scheduled tasks are handed to.
    dispatcher: Arc<dyn TaskDispatcher>,
    /// Task configuration (cron expressions, retention).
    config: TasksConfig,
}

impl std::fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScheduler").finish()
    }
}

impl TaskScheduler {
    /// Create a new task scheduler.
    pub async fn new(
        dispatcher: Arc<dyn TaskDispatcher>,
        config: TasksConfig,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            dispatcher,
            config,
        })
    }

    /// Register all periodic tasks.
    pub async fn register_default_tasks(&self) -> Result<(), AppError> {
        self.register_snapshot_sweep().await?;
        self.register_querylog_truncation().await?;

        tracing::info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        tracing::info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        tracing::info!("Cron scheduler shut down");
        Ok(())
    }

    /// Snapshot sweep — dispatches `snapshot_queries` on its cron schedule.
    async fn register_snapshot_sweep(&self) -> Result<(), AppError> {
        let dispatcher = Arc::clone(&self.dispatcher);
        let job = CronJob::new_async(
            self.config.snapshot_schedule.as_str(),
            move |_uuid, _lock| {
                let dispatcher = Arc::clone(&dispatcher);
                Box::pin(async move {
                    tracing::debug!("Dispatching scheduled snapshot sweep");
                    if let Err(e) = dispatcher.dispatch(TaskRequest::SnapshotQueries).await {
                        tracing::error!("Failed to dispatch snapshot sweep: {}", e);
                    }
                })
            },
        )
        .map_err(|e| AppError::internal(format!("Failed to create snapshot schedule: {e}")))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add snapshot schedule: {e}")))?;

        tracing::info!(
            schedule = %self.config.snapshot_schedule,
            "Registered: snapshot sweep"
        );
        Ok(())
    }

    /// Query-log truncation — dispatches `truncate_querylogs` with the
    /// configured retention on its cron schedule.
    async fn register_querylog_truncation(&self) -> Result<(), AppError> {
        let dispatcher = Arc::clone(&self.dispatcher);
        let days = self.config.querylog_retention_days;
        let job = CronJob::new_async(
            self.config.truncate_schedule.as_str(),
            move |_uuid, _lock| {
                let dispatcher = Arc::clone(&dispatcher);
                Box::pin(async move {
                    tracing::debug!(days, "Dispatching scheduled query log truncation");
                    if let Err(e) = dispatcher
                        .dispatch(TaskRequest::TruncateQueryLogs { days })
                        .await
                    {
                        tracing::error!("Failed to dispatch query log truncation: {}", e);
                    }
                })
            },
        )
        .map_err(|e| AppError::internal(format!("Failed to create truncation schedule: {e}")))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add truncation schedule: {e}")))?;

        tracing::info!(
            schedule = %self.config.truncate_schedule,
            retention_days = days,
            "Registered: query log truncation"
        );
        Ok(())
    }
}
