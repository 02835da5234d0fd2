//! # explorer-core
//!
//! Core crate for SQL Explorer background tasks. Contains the trait seams to
//! the external services (object storage, mail, exporter), configuration
//! schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Explorer crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
