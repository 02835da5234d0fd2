//! # explorer-exporter
//!
//! HTTP implementation of the [`QueryExporter`] seam. The hosting SQL tool
//! runs the query and renders CSV; this crate only fetches the bytes.
//!
//! [`QueryExporter`]: explorer_core::traits::QueryExporter

pub mod http;

pub use http::HttpQueryExporter;
