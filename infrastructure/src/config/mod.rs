//! Configuration file loading
//!
//! Sources are merged with figment; see [`ConfigLoader::load`] for the
//! priority order.

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{FileConfig, FileHiringConfig, FileLoggingConfig};
pub use loader::ConfigLoader;
