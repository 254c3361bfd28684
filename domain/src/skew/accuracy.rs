//! Simulated accuracy as a function of training-data share

use serde::{Deserialize, Serialize};

/// Linear accuracy model around the balance point
///
/// The group holding at least half of the training data gains
/// `advantaged_slope` points per point of deviation from the balance point,
/// capped at `ceiling`. The other group loses `disadvantaged_slope` points
/// per point of deviation, never dropping below `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccuracyModel {
    /// Accuracy of both groups at a perfect split
    pub baseline: f64,
    /// Upper bound for the advantaged group
    pub ceiling: f64,
    /// Lower bound for the disadvantaged group
    pub floor: f64,
    pub advantaged_slope: f64,
    pub disadvantaged_slope: f64,
    /// Share at which neither group is favoured
    pub balance_point: f64,
}

impl Default for AccuracyModel {
    fn default() -> Self {
        Self {
            baseline: 85.0,
            ceiling: 95.0,
            floor: 45.0,
            advantaged_slope: 0.2,
            disadvantaged_slope: 0.8,
            balance_point: 50.0,
        }
    }
}

impl AccuracyModel {
    /// Accuracy for a group holding `percentage` of the training data
    ///
    /// `percentage` is clamped into `0..=100` before use. The result is not
    /// rounded. A NaN `percentage` yields NaN in every build; use
    /// [`SkewSplit::from_group_a`](super::SkewSplit::from_group_a) to reject
    /// it up front.
    pub fn accuracy(&self, percentage: f64, is_advantaged: bool) -> f64 {
        // `min`/`max` would swallow NaN and return the bound
        if percentage.is_nan() {
            return f64::NAN;
        }
        let percentage = percentage.clamp(0.0, 100.0);
        let deviation = (self.balance_point - percentage).abs();

        if is_advantaged {
            (self.baseline + deviation * self.advantaged_slope).min(self.ceiling)
        } else {
            (self.baseline - deviation * self.disadvantaged_slope).max(self.floor)
        }
    }

    /// Whether a group holding `share` of the data takes the advantaged branch
    pub fn is_advantaged(&self, share: f64) -> bool {
        share >= self.balance_point
    }

    /// Accuracy for a group, picking the branch from its own share
    pub fn group_accuracy(&self, share: f64) -> f64 {
        self.accuracy(share, self.is_advantaged(share))
    }
}

/// Accuracy under the default model
///
/// Out-of-range shares are clamped into `0..=100`. NaN is not a share: it
/// is returned unchanged as NaN rather than mapped onto the ceiling or
/// floor, in debug and release builds alike.
///
/// # Example
///
/// ```
/// use biaslab_domain::skew::compute_accuracy;
///
/// assert_eq!(compute_accuracy(90.0, true), 93.0);
/// assert_eq!(compute_accuracy(10.0, false), 53.0);
/// ```
pub fn compute_accuracy(percentage: f64, is_advantaged: bool) -> f64 {
    AccuracyModel::default().accuracy(percentage, is_advantaged)
}
