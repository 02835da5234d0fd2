//! # explorer-entity
//!
//! Domain entity models for SQL Explorer tasks. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! The crate also defines the store traits ([`query::QueryStore`],
//! [`query::QueryLogStore`]) through which the task layer reaches the
//! persistence layer; `explorer-database` provides the sqlx-backed
//! implementations.

pub mod query;
pub mod task;
