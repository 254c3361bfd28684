//! Hiring algorithm bias
//!
//! Every candidate carries two pre-authored scores: a fair score based on
//! qualifications and a score learned from historically biased hiring data.
//! A [`ScoringMode`] picks which score is active; nothing is recomputed from
//! the candidate's protected attributes at runtime.

pub mod candidate;
pub mod mode;
pub mod ranking;
pub mod stats;

pub use candidate::{Candidate, Gender, ProtectedAttributes};
pub use mode::{AnalysisView, ScoringMode};
pub use ranking::{
    AverageDivisor, DeltaDirection, ScoreDelta, ScoreTier, group_average, group_average_with,
    rank_candidates, try_group_average,
};
pub use stats::{AgePoint, GenderStats, RankedCandidate};
