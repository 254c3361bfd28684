//! Training-set split between the two groups

use crate::core::error::DomainError;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Percentage allocation of the training set to Group A and Group B
///
/// Only Group A's share is stored; Group B always gets the remainder so the
/// two shares sum to 100 by construction.
///
/// # Example
///
/// ```
/// use biaslab_domain::skew::SkewSplit;
///
/// let split = SkewSplit::from_group_a(70.0).unwrap();
/// assert_eq!(split.group_b(), 30.0);
///
/// // Out-of-range input is clamped to the slider domain
/// assert_eq!(SkewSplit::from_group_a(140.0).unwrap().group_a(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewSplit {
    group_a: f64,
}

impl SkewSplit {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Build a split from Group A's share, clamping it into `0..=100`
    ///
    /// NaN has no meaningful clamped value and is rejected.
    pub fn from_group_a(percentage: f64) -> Result<Self, DomainError> {
        if percentage.is_nan() {
            return Err(DomainError::InvalidSkew(percentage));
        }
        Ok(Self {
            group_a: percentage.clamp(Self::MIN, Self::MAX),
        })
    }

    /// The perfectly balanced 50/50 split
    pub fn balanced() -> Self {
        Self { group_a: 50.0 }
    }

    pub fn group_a(&self) -> f64 {
        self.group_a
    }

    pub fn group_b(&self) -> f64 {
        Self::MAX - self.group_a
    }

    /// Whether `percentage` was outside the slider domain and had to be clamped
    pub fn needs_clamping(percentage: f64) -> bool {
        !(Self::MIN..=Self::MAX).contains(&percentage)
    }
}

// Both shares are written out so renderers never recompute the remainder.
impl Serialize for SkewSplit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SkewSplit", 2)?;
        state.serialize_field("group_a", &self.group_a())?;
        state.serialize_field("group_b", &self.group_b())?;
        state.end()
    }
}

impl Default for SkewSplit {
    fn default() -> Self {
        Self::balanced()
    }
}
