//! Utilities shared by database connectors

pub mod retry;

pub use retry::{retry, retry_with_backoff, RetryConfig};
