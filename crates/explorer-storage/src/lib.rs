//! # explorer-storage
//!
//! S3-compatible implementation of the [`ReportStore`] seam, plus the
//! object-key builders for ad-hoc exports and snapshots.
//!
//! [`ReportStore`]: explorer_core::traits::ReportStore

pub mod keys;
pub mod s3;

pub use s3::S3ReportStore;
