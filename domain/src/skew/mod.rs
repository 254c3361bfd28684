//! Skewed training data
//!
//! A single slider splits the training set between Group A and Group B.
//! The split drives a simulated accuracy per group, and the gap between the
//! two accuracies is classified as a [`BiasLevel`].
//!
//! ```text
//!  SkewSplit (A%, 100−A%)
//!        │
//!        ▼
//!  AccuracyModel::group_accuracy ──► accuracy A, accuracy B
//!        │
//!        ▼
//!  BiasThresholds::classify(|A − B|) ──► Low / Moderate / High
//! ```

pub mod accuracy;
pub mod bias;
pub mod split;

pub use accuracy::{AccuracyModel, compute_accuracy};
pub use bias::{BiasLevel, BiasThresholds, SkewReport, classify_bias};
pub use split::SkewSplit;
