//! Task request envelope.

pub mod request;

pub use request::TaskRequest;
