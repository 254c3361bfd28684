//! Visual scales for the facial-recognition metric cards

use super::group::GroupMetric;
use crate::core::color::ColorToken;
use serde::Serialize;

/// How alarming a false-positive rate is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum FalsePositiveSeverity {
    Acceptable,
    Elevated,
    Severe,
}

impl FalsePositiveSeverity {
    pub fn for_rate(rate: f64) -> Self {
        if rate > 5.0 {
            FalsePositiveSeverity::Severe
        } else if rate > 2.0 {
            FalsePositiveSeverity::Elevated
        } else {
            FalsePositiveSeverity::Acceptable
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            FalsePositiveSeverity::Acceptable => ColorToken::Green,
            FalsePositiveSeverity::Elevated => ColorToken::Orange,
            FalsePositiveSeverity::Severe => ColorToken::Red,
        }
    }
}

/// Geometry of one metric card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricCard {
    pub metric: GroupMetric,
    /// Sample bar width, percent of the largest reference sample count
    pub sample_bar_width: f64,
    /// Stroke length on the accuracy ring
    pub accuracy_ring_dash: f64,
    /// False-positive bar height, percent
    pub false_positive_bar_height: f64,
    pub false_positive_severity: FalsePositiveSeverity,
}

impl MetricCard {
    /// Circumference of the accuracy ring in stroke units
    pub const RING_CIRCUMFERENCE: f64 = 201.0;
    /// Bar height percent per point of false-positive rate
    pub const FALSE_POSITIVE_SCALE: f64 = 7.0;

    /// `max_samples` is the scale's 100% mark; zero yields empty bars
    pub fn new(metric: GroupMetric, max_samples: u32) -> Self {
        Self {
            metric,
            sample_bar_width: Self::sample_bar_width(metric.training_samples, max_samples),
            accuracy_ring_dash: Self::accuracy_ring_dash(metric.accuracy),
            false_positive_bar_height: Self::false_positive_bar_height(
                metric.false_positive_rate,
            ),
            false_positive_severity: FalsePositiveSeverity::for_rate(metric.false_positive_rate),
        }
    }

    pub fn sample_bar_width(samples: u32, max_samples: u32) -> f64 {
        if max_samples == 0 {
            return 0.0;
        }
        samples as f64 / max_samples as f64 * 100.0
    }

    pub fn accuracy_ring_dash(accuracy: f64) -> f64 {
        accuracy * Self::RING_CIRCUMFERENCE / 100.0
    }

    pub fn false_positive_bar_height(rate: f64) -> f64 {
        (rate * Self::FALSE_POSITIVE_SCALE).min(100.0)
    }
}

/// Disparity across all groups of one metric set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Best minus worst accuracy, in points
    pub accuracy_gap: f64,
    /// Worst over best false-positive rate
    pub false_positive_ratio: Option<f64>,
}

impl DatasetSummary {
    /// Returns `None` for an empty set; the ratio is `None` when the best rate is zero
    pub fn compute(metrics: &[GroupMetric]) -> Option<Self> {
        let (first, rest) = metrics.split_first()?;

        let init = (
            first.accuracy,
            first.accuracy,
            first.false_positive_rate,
            first.false_positive_rate,
        );
        let (min_acc, max_acc, min_fp, max_fp) =
            rest.iter().fold(init, |(lo_a, hi_a, lo_f, hi_f), m| {
                (
                    lo_a.min(m.accuracy),
                    hi_a.max(m.accuracy),
                    lo_f.min(m.false_positive_rate),
                    hi_f.max(m.false_positive_rate),
                )
            });

        Some(Self {
            accuracy_gap: max_acc - min_acc,
            false_positive_ratio: (min_fp > 0.0).then(|| max_fp / min_fp),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facial::group::DatasetMode;
    use crate::registry;

    #[test]
    fn test_false_positive_severity() {
        assert_eq!(FalsePositiveSeverity::for_rate(0.8), FalsePositiveSeverity::Acceptable);
        assert_eq!(FalsePositiveSeverity::for_rate(2.0), FalsePositiveSeverity::Acceptable);
        assert_eq!(FalsePositiveSeverity::for_rate(2.1), FalsePositiveSeverity::Elevated);
        assert_eq!(FalsePositiveSeverity::for_rate(5.0), FalsePositiveSeverity::Elevated);
        assert_eq!(FalsePositiveSeverity::for_rate(12.7), FalsePositiveSeverity::Severe);
        assert_eq!(FalsePositiveSeverity::Severe.color(), ColorToken::Red);
    }

    #[test]
    fn test_sample_bar_width() {
        assert_eq!(MetricCard::sample_bar_width(8500, 8500), 100.0);
        assert_eq!(MetricCard::sample_bar_width(4250, 8500), 50.0);
        assert_eq!(MetricCard::sample_bar_width(10, 0), 0.0);
    }

    #[test]
    fn test_false_positive_bar_is_capped() {
        assert!((MetricCard::false_positive_bar_height(6.4) - 44.8).abs() < 1e-9);
        assert_eq!(MetricCard::false_positive_bar_height(20.0), 100.0);
    }

    #[test]
    fn test_accuracy_ring_dash() {
        assert_eq!(MetricCard::accuracy_ring_dash(100.0), 201.0);
        assert_eq!(MetricCard::accuracy_ring_dash(0.0), 0.0);
    }

    #[test]
    fn test_skewed_summary() {
        let summary = DatasetSummary::compute(registry::facial_metrics(DatasetMode::Skewed)).unwrap();
        assert!((summary.accuracy_gap - 28.9).abs() < 1e-9);
        assert!((summary.false_positive_ratio.unwrap() - 15.875).abs() < 1e-9);
    }

    #[test]
    fn test_balanced_summary_is_tighter() {
        let skewed = DatasetSummary::compute(registry::facial_metrics(DatasetMode::Skewed)).unwrap();
        let balanced =
            DatasetSummary::compute(registry::facial_metrics(DatasetMode::Balanced)).unwrap();
        assert!(balanced.accuracy_gap < skewed.accuracy_gap);
        assert!(balanced.false_positive_ratio < skewed.false_positive_ratio);
    }

    #[test]
    fn test_empty_summary() {
        assert!(DatasetSummary::compute(&[]).is_none());
    }
}
