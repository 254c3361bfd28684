//! Facial recognition bias
//!
//! Two fixed metric sets per demographic group: one measured on a skewed
//! training set and one on a balanced set. A [`DatasetMode`] selects a set
//! wholesale; the two are never interpolated.

pub mod group;
pub mod scales;

pub use group::{DatasetMode, Group, GroupMetric};
pub use scales::{DatasetSummary, FalsePositiveSeverity, MetricCard};
