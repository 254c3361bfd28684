//! Subscriber setup

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to install tracing subscriber: {0}")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Default filter directive for a verbosity level
///
/// 0 = warn, 1 = info, 2 = debug, 3+ = trace
pub fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber at the given verbosity.
///
/// `RUST_LOG`, when set, replaces the verbosity-derived filter. Events are
/// written through a non-blocking writer; keep the returned guard alive
/// until shutdown so buffered lines are flushed. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(verbosity: u8) -> Result<WorkerGuard, LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .try_init()
        .map_err(LoggingError::Install)?;

    Ok(guard)
}
