//! Wiring of configuration, logging and the demo session
//!
//! This is the composition root: it loads the layered configuration,
//! installs the subscriber at the configured verbosity and injects the
//! infrastructure adapters into a [`DemoSession`].

use crate::config::{ConfigError, ConfigLoader};
use crate::logging::{TracingReportSink, init_tracing};
use biaslab_application::{ConfigIssue, DemoSession};
use std::path::Path;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

/// A ready-to-use session plus what it took to build it
pub struct Runtime {
    pub session: DemoSession,
    /// Non-fatal configuration issues (already logged)
    pub issues: Vec<ConfigIssue>,
    /// `None` when another subscriber was already installed
    guard: Option<WorkerGuard>,
}

impl Runtime {
    /// Whether this runtime owns the global subscriber
    pub fn owns_subscriber(&self) -> bool {
        self.guard.is_some()
    }
}

/// Load configuration, install logging and build a session.
///
/// An already-installed global subscriber is kept; reports are then logged
/// through it.
pub fn bootstrap(config_path: Option<&Path>) -> Result<Runtime, ConfigError> {
    let file_config = ConfigLoader::load(config_path)?;

    let guard = match init_tracing(file_config.logging.verbosity) {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("{}; keeping the existing subscriber", e);
            None
        }
    };

    let (config, issues) = ConfigLoader::validate(&file_config)?;
    let session = DemoSession::new(config).with_sink(Box::new(TracingReportSink::new()));

    info!("Starting biaslab session");

    Ok(Runtime {
        session,
        issues,
        guard,
    })
}
