//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! Example configuration:
//!
//! ```toml
//! [accuracy]
//! baseline = 85.0
//! ceiling = 95.0
//! floor = 45.0
//! advantaged_slope = 0.2
//! disadvantaged_slope = 0.8
//!
//! [bias_thresholds]
//! moderate = 5.0
//! high = 15.0
//!
//! [hiring]
//! average_divisor = "matched_count"
//!
//! [logging]
//! verbosity = 1
//! ```

mod hiring;
mod logging;

pub use hiring::FileHiringConfig;
pub use logging::FileLoggingConfig;

use biaslab_application::{ConfigIssue, SimulationConfig};
use biaslab_domain::{AccuracyModel, BiasThresholds};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Skew-accuracy model constants
    pub accuracy: AccuracyModel,
    /// Accuracy-gap thresholds for the bias level
    pub bias_thresholds: BiasThresholds,
    /// Hiring demonstration settings
    pub hiring: FileHiringConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Convert to the application configuration.
    ///
    /// Unparseable values fall back to their defaults; the returned issues
    /// describe every fallback.
    pub fn to_simulation_config(&self) -> (SimulationConfig, Vec<ConfigIssue>) {
        let (divisor, issues) = self.hiring.parse_average_divisor();
        let config = SimulationConfig::default()
            .with_accuracy(self.accuracy)
            .with_bias_thresholds(self.bias_thresholds)
            .with_average_divisor(divisor);
        (config, issues)
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Values that cannot be parsed (e.g. `hiring.average_divisor`)
    /// 2. Formula constants that break the documented output ranges
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let (config, mut issues) = self.to_simulation_config();
        issues.extend(config.validate());
        issues
    }
}
