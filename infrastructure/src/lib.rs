//! Infrastructure layer for biaslab
//!
//! This crate contains the adapters around the application layer:
//! configuration file loading and the tracing setup, including a
//! [`ReportSink`](biaslab_application::ReportSink) that logs reports.
//! [`bootstrap()`] wires them into a ready session.

pub mod bootstrap;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{Runtime, bootstrap};
pub use config::{ConfigError, ConfigLoader, FileConfig, FileHiringConfig, FileLoggingConfig};
pub use logging::{LoggingError, TracingReportSink, filter_directive, init_tracing};
