//! Domain layer for biaslab
//!
//! This crate contains the bias-simulation formulas, the entities they operate
//! on and the static reference datasets. Every function here is pure: no
//! I/O, no logging, no state retained between calls.
//!
//! # Demonstrations
//!
//! ## Skewed datasets
//!
//! A single training-data split drives a simulated accuracy for two groups
//! and a [`BiasLevel`] for the gap between them.
//!
//! ## Hiring
//!
//! Six candidates with a fair and a historically biased score, ranked under a
//! [`ScoringMode`] and averaged per gender.
//!
//! ## Facial recognition
//!
//! Four demographic groups measured on a skewed and a balanced training set.
//!
//! ## Search results
//!
//! Authored result lists per [`Topic`], balanced or filter-bubbled.

pub mod core;
pub mod facial;
pub mod hiring;
pub mod registry;
pub mod search;
pub mod skew;

// Re-export commonly used types
pub use crate::core::{color::ColorToken, error::DomainError};
pub use facial::{
    DatasetMode, DatasetSummary, FalsePositiveSeverity, Group, GroupMetric, MetricCard,
};
pub use hiring::{
    AgePoint, AnalysisView, AverageDivisor, Candidate, DeltaDirection, Gender, GenderStats,
    ProtectedAttributes, RankedCandidate, ScoreDelta, ScoreTier, ScoringMode, group_average,
    group_average_with, rank_candidates, try_group_average,
};
pub use search::{
    ResultMode, SearchResult, Stance, StanceBreakdown, StanceStyle, Topic, select_results,
    stance_style,
};
pub use skew::{
    AccuracyModel, BiasLevel, BiasThresholds, SkewReport, SkewSplit, classify_bias,
    compute_accuracy,
};
