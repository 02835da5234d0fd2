//! # explorer-tasks
//!
//! The background task entry points for SQL Explorer:
//! - `execute_query` — export a query to CSV, upload it, email a link
//! - `snapshot_query` — export and upload under a deterministic key
//! - `snapshot_queries` — dispatch one snapshot task per flagged query
//! - `truncate_querylogs` — prune old query execution logs
//!
//! Tasks reach the external services through the trait seams in
//! `explorer-core` and are handed off through a [`TaskDispatcher`]: queued
//! (external worker fleet) or inline (fallback/test mode). A cron
//! [`TaskScheduler`] covers the periodic snapshot sweep and log pruning.

pub mod deps;
pub mod dispatch;
pub mod jobs;
pub mod report;
pub mod scheduler;
pub mod service;

#[cfg(test)]
pub(crate) mod testutil;

pub use deps::TaskDeps;
pub use dispatch::{InlineDispatcher, QueuedDispatcher, TaskDispatcher};
pub use scheduler::TaskScheduler;
pub use service::TaskService;
