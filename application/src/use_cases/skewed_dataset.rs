//! Skewed dataset use case
//!
//! Maps a slider position to per-group accuracy and a bias level.

use crate::config::SimulationConfig;
use biaslab_domain::{DomainError, SkewReport, SkewSplit};
use tracing::{debug, warn};

/// Input for the SkewedDataset use case
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewedDatasetInput {
    /// Group A's share of the training data, in percent
    pub group_a_percentage: f64,
}

impl SkewedDatasetInput {
    pub fn new(group_a_percentage: f64) -> Self {
        Self { group_a_percentage }
    }
}

/// Use case for the skewed-dataset demonstration
pub struct SkewedDatasetUseCase {
    config: SimulationConfig,
}

impl SkewedDatasetUseCase {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Compute the report for a slider position
    ///
    /// Out-of-range input is clamped to `0..=100`; NaN is rejected.
    pub fn execute(&self, input: SkewedDatasetInput) -> Result<SkewReport, DomainError> {
        let requested = input.group_a_percentage;
        if SkewSplit::needs_clamping(requested) && !requested.is_nan() {
            warn!("Skew {} outside 0..=100, clamping", requested);
        }

        let split = SkewSplit::from_group_a(requested)?;
        Ok(self.report_for(split))
    }

    /// Compute the report for an already validated split
    pub fn report_for(&self, split: SkewSplit) -> SkewReport {
        let report = SkewReport::compute(
            split,
            &self.config.accuracy,
            &self.config.bias_thresholds,
        );
        debug!(
            group_a = split.group_a(),
            group_b = split.group_b(),
            accuracy_a = report.accuracy_a,
            accuracy_b = report.accuracy_b,
            level = %report.bias_level,
            "Recomputed skew report"
        );
        report
    }
}
