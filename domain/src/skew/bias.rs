//! Bias classification of the accuracy gap between two groups

use super::accuracy::AccuracyModel;
use super::split::SkewSplit;
use crate::core::color::ColorToken;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of the accuracy gap between two groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BiasLevel {
    Low,
    Moderate,
    High,
}

impl BiasLevel {
    pub fn color(&self) -> ColorToken {
        match self {
            BiasLevel::Low => ColorToken::Green,
            BiasLevel::Moderate => ColorToken::Orange,
            BiasLevel::High => ColorToken::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BiasLevel::Low => "Low",
            BiasLevel::Moderate => "Moderate",
            BiasLevel::High => "High",
        }
    }
}

impl fmt::Display for BiasLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gap thresholds separating the bias levels
///
/// Each threshold belongs to the level above it: a gap of exactly
/// `moderate` is Moderate, a gap of exactly `high` is High.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiasThresholds {
    pub moderate: f64,
    pub high: f64,
}

impl Default for BiasThresholds {
    fn default() -> Self {
        Self {
            moderate: 5.0,
            high: 15.0,
        }
    }
}

impl BiasThresholds {
    /// Classify an absolute accuracy gap
    pub fn classify(&self, difference: f64) -> BiasLevel {
        let difference = difference.abs();
        if difference < self.moderate {
            BiasLevel::Low
        } else if difference < self.high {
            BiasLevel::Moderate
        } else {
            BiasLevel::High
        }
    }
}

/// Classify the gap between two accuracies with the default thresholds
///
/// # Example
///
/// ```
/// use biaslab_domain::skew::{BiasLevel, classify_bias};
///
/// assert_eq!(classify_bias(93.0, 53.0), BiasLevel::High);
/// assert_eq!(classify_bias(85.0, 85.0), BiasLevel::Low);
/// ```
pub fn classify_bias(accuracy_a: f64, accuracy_b: f64) -> BiasLevel {
    BiasThresholds::default().classify(accuracy_a - accuracy_b)
}

/// Everything the skewed-dataset demonstration shows for one slider position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkewReport {
    pub split: SkewSplit,
    pub accuracy_a: f64,
    pub accuracy_b: f64,
    /// Absolute accuracy gap
    pub difference: f64,
    pub bias_level: BiasLevel,
}

impl SkewReport {
    /// Accuracy above which a group's bar is drawn as healthy
    pub const HEALTHY_ACCURACY: f64 = 75.0;

    pub fn compute(split: SkewSplit, model: &AccuracyModel, thresholds: &BiasThresholds) -> Self {
        let accuracy_a = model.group_accuracy(split.group_a());
        let accuracy_b = model.group_accuracy(split.group_b());
        let difference = (accuracy_a - accuracy_b).abs();

        Self {
            split,
            accuracy_a,
            accuracy_b,
            difference,
            bias_level: thresholds.classify(difference),
        }
    }

    /// Bar colour for an accuracy value
    pub fn accuracy_color(accuracy: f64) -> ColorToken {
        if accuracy > Self::HEALTHY_ACCURACY {
            ColorToken::Green
        } else {
            ColorToken::Red
        }
    }
}
