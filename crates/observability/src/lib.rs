//! Tracing/logging setup shared by the binaries.

/// Subscriber configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat, init};
