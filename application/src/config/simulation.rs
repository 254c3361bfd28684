//! Simulation constants

use super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use biaslab_domain::{AccuracyModel, AverageDivisor, BiasThresholds};
use serde::{Deserialize, Serialize};

/// Constants of the skew-accuracy model, bias classification and averaging.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub accuracy: AccuracyModel,
    pub bias_thresholds: BiasThresholds,
    /// Divisor policy for per-gender averages
    pub average_divisor: AverageDivisor,
}

impl SimulationConfig {
    // ==================== Builder Methods ====================

    pub fn with_accuracy(mut self, accuracy: AccuracyModel) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_bias_thresholds(mut self, thresholds: BiasThresholds) -> Self {
        self.bias_thresholds = thresholds;
        self
    }

    pub fn with_average_divisor(mut self, divisor: AverageDivisor) -> Self {
        self.average_divisor = divisor;
        self
    }

    // ==================== Validation ====================

    /// Check the constants for combinations that break the formulas' ranges.
    ///
    /// Non-finite constants are reported on their own: ordering checks are
    /// skipped because every comparison against NaN is false.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.non_finite_constants();
        if !issues.is_empty() {
            return issues;
        }
        let acc = &self.accuracy;

        if acc.ceiling < acc.baseline {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::CeilingBelowBaseline,
                format!(
                    "accuracy.ceiling ({}) is below accuracy.baseline ({})",
                    acc.ceiling, acc.baseline
                ),
            ));
        }

        if acc.floor > acc.baseline {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::FloorAboveBaseline,
                format!(
                    "accuracy.floor ({}) is above accuracy.baseline ({})",
                    acc.floor, acc.baseline
                ),
            ));
        }

        for (field, slope) in [
            ("accuracy.advantaged_slope", acc.advantaged_slope),
            ("accuracy.disadvantaged_slope", acc.disadvantaged_slope),
        ] {
            if slope < 0.0 {
                issues.push(ConfigIssue::new(
                    Severity::Error,
                    ConfigIssueCode::NegativeSlope,
                    format!("{field} ({slope}) must not be negative"),
                ));
            }
        }

        if !(0.0..=100.0).contains(&acc.balance_point) {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::BalancePointOutOfRange,
                format!(
                    "accuracy.balance_point ({}) must be within 0..=100",
                    acc.balance_point
                ),
            ));
        }

        let thresholds = &self.bias_thresholds;
        if thresholds.moderate < 0.0 || thresholds.high < thresholds.moderate {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::ThresholdsNotAscending,
                format!(
                    "bias_thresholds must satisfy 0 <= moderate ({}) <= high ({})",
                    thresholds.moderate, thresholds.high
                ),
            ));
        }

        match self.average_divisor {
            AverageDivisor::Fixed(0) => issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::ZeroDivisor,
                "average_divisor: fixed divisor must be greater than zero".to_string(),
            )),
            AverageDivisor::Fixed(n) => issues.push(ConfigIssue::new(
                Severity::Warning,
                ConfigIssueCode::FixedDivisor,
                format!(
                    "average_divisor: fixed divisor {n} ignores how many candidates match; \
                     averages are only correct when every group has exactly {n} members"
                ),
            )),
            AverageDivisor::MatchedCount => {}
        }

        issues
    }

    fn non_finite_constants(&self) -> Vec<ConfigIssue> {
        let acc = &self.accuracy;
        let thresholds = &self.bias_thresholds;
        [
            ("accuracy.baseline", acc.baseline),
            ("accuracy.ceiling", acc.ceiling),
            ("accuracy.floor", acc.floor),
            ("accuracy.advantaged_slope", acc.advantaged_slope),
            ("accuracy.disadvantaged_slope", acc.disadvantaged_slope),
            ("accuracy.balance_point", acc.balance_point),
            ("bias_thresholds.moderate", thresholds.moderate),
            ("bias_thresholds.high", thresholds.high),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(field, value)| {
            ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::NonFiniteConstant,
                format!("{field} ({value}) must be a finite number"),
            )
        })
        .collect()
    }
}
