//! Task invocation CLI commands.

use clap::Args;

use explorer_core::error::AppError;
use explorer_tasks::TaskService;

/// Arguments for `execute-query`
#[derive(Debug, Args)]
pub struct ExecuteQueryArgs {
    /// Query id to run
    pub query_id: i64,
    /// Destination email address for the download link
    pub email: String,
}

/// Arguments for `snapshot-query`
#[derive(Debug, Args)]
pub struct SnapshotQueryArgs {
    /// Query id to snapshot
    pub query_id: i64,
}

/// Arguments for `truncate-querylogs`
#[derive(Debug, Args)]
pub struct TruncateQuerylogsArgs {
    /// Delete log rows older than this many days
    pub days: i64,
}

/// Run a query export end to end and report the download URL.
pub async fn execute_query(
    service: &TaskService,
    args: &ExecuteQueryArgs,
) -> Result<(), AppError> {
    let url = service.execute_query(args.query_id, &args.email).await?;
    println!("Report uploaded; link mailed to {}.", args.email);
    println!("{url}");
    Ok(())
}

/// Snapshot a single query and report the object key.
pub async fn snapshot_query(
    service: &TaskService,
    args: &SnapshotQueryArgs,
) -> Result<(), AppError> {
    let key = service.snapshot_query(args.query_id).await?;
    println!("Snapshot stored as {key}.");
    Ok(())
}

/// Dispatch snapshot tasks for every flagged query.
pub async fn snapshot_queries(service: &TaskService) -> Result<(), AppError> {
    let count = service.snapshot_queries().await?;
    println!("Dispatched {count} snapshot task(s).");
    Ok(())
}

/// Prune old query logs.
pub async fn truncate_querylogs(
    service: &TaskService,
    args: &TruncateQuerylogsArgs,
) -> Result<(), AppError> {
    let deleted = service.truncate_querylogs(args.days).await?;
    println!("Deleted {deleted} query log row(s) older than {} days.", args.days);
    Ok(())
}
