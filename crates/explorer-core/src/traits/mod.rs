//! Trait seams defined in `explorer-core` and implemented by other crates.
//!
//! Each trait wraps one of the external services the task wrappers
//! orchestrate: object storage, mail delivery, and CSV export.

pub mod exporter;
pub mod mailer;
pub mod store;

pub use exporter::QueryExporter;
pub use mailer::Mailer;
pub use store::ReportStore;
