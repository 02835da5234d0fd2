//! Concrete repository implementations.

pub mod query;
pub mod query_log;
pub mod task_queue;

pub use query::QueryRepository;
pub use query_log::QueryLogRepository;
pub use task_queue::TaskQueueRepository;
