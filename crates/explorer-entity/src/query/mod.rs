//! Query and query-log entities.

pub mod log;
pub mod model;
pub mod store;

pub use log::QueryLog;
pub use model::Query;
pub use store::{QueryLogStore, QueryStore};
