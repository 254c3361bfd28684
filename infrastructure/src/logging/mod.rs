//! Logging infrastructure
//!
//! [`init_tracing`] installs the process-wide subscriber and
//! [`TracingReportSink`] forwards computed reports to it as structured
//! events.

mod report_logger;
mod subscriber;

pub use report_logger::TracingReportSink;
pub use subscriber::{LoggingError, filter_directive, init_tracing};
