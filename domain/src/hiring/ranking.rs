//! Ranking and scoring engine

use super::candidate::Candidate;
use super::mode::ScoringMode;
use crate::core::color::ColorToken;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Order candidates by their active score, highest first
///
/// The sort is stable: candidates with equal scores keep their input order.
/// The input is left untouched.
///
/// # Example
///
/// ```
/// use biaslab_domain::hiring::{ScoringMode, rank_candidates};
/// use biaslab_domain::registry;
///
/// let ranked = rank_candidates(registry::reference_candidates(), ScoringMode::Fair);
/// assert_eq!(ranked[0].name, "Emily Rodriguez");
/// ```
pub fn rank_candidates(candidates: &[Candidate], mode: ScoringMode) -> Vec<&Candidate> {
    let mut ranked: Vec<&Candidate> = candidates.iter().collect();
    ranked.sort_by(|a, b| b.score(mode).total_cmp(&a.score(mode)));
    ranked
}

/// What a group average divides the summed scores by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AverageDivisor {
    /// The number of candidates that matched the predicate
    #[default]
    MatchedCount,
    /// A fixed sample size, regardless of how many candidates matched
    Fixed(usize),
}

/// Average active score of the candidates matching `predicate`
///
/// Returns `None` when no candidate matches.
///
/// # Example
///
/// ```
/// use biaslab_domain::hiring::{Gender, ScoringMode, group_average};
/// use biaslab_domain::registry;
///
/// let female = group_average(
///     registry::reference_candidates(),
///     |c| c.gender() == Gender::Female,
///     ScoringMode::HistoricallyBiased,
/// )
/// .unwrap();
/// assert!((female - 77.33).abs() < 0.01);
/// ```
pub fn group_average<P>(candidates: &[Candidate], predicate: P, mode: ScoringMode) -> Option<f64>
where
    P: Fn(&Candidate) -> bool,
{
    group_average_with(candidates, predicate, mode, AverageDivisor::MatchedCount)
}

/// [`group_average`] with an explicit divisor policy
///
/// A [`AverageDivisor::Fixed`] divisor of zero yields `None`, as does a
/// predicate with no matches under either policy.
pub fn group_average_with<P>(
    candidates: &[Candidate],
    predicate: P,
    mode: ScoringMode,
    divisor: AverageDivisor,
) -> Option<f64>
where
    P: Fn(&Candidate) -> bool,
{
    let (sum, matched) = candidates
        .iter()
        .filter(|&c| predicate(c))
        .fold((0.0, 0usize), |(sum, n), c| (sum + c.score(mode), n + 1));

    if matched == 0 {
        return None;
    }

    let denominator = match divisor {
        AverageDivisor::MatchedCount => matched,
        AverageDivisor::Fixed(0) => return None,
        AverageDivisor::Fixed(n) => n,
    };

    Some(sum / denominator as f64)
}

/// [`group_average_with`] for callers that treat an empty group as an error
pub fn try_group_average<P>(
    candidates: &[Candidate],
    predicate: P,
    mode: ScoringMode,
    divisor: AverageDivisor,
) -> Result<f64, DomainError>
where
    P: Fn(&Candidate) -> bool,
{
    group_average_with(candidates, predicate, mode, divisor)
        .ok_or(DomainError::NoMatchingCandidates)
}

/// Direction in which the biased model moved a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaDirection {
    Positive,
    Negative,
}

/// Score change annotation shown next to a candidate in biased mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreDelta {
    pub value: f64,
    pub direction: DeltaDirection,
}

impl ScoreDelta {
    /// Annotation for `candidate`, present only in biased mode with a nonzero delta
    pub fn for_candidate(candidate: &Candidate, mode: ScoringMode) -> Option<Self> {
        let value = candidate.bias_delta();
        if !mode.is_biased() || value == 0.0 {
            return None;
        }

        let direction = if value > 0.0 {
            DeltaDirection::Positive
        } else {
            DeltaDirection::Negative
        };
        Some(Self { value, direction })
    }

    /// Signed label, e.g. `+5` or `-12`
    pub fn label(&self) -> String {
        match self.direction {
            DeltaDirection::Positive => format!("+{}", self.value),
            DeltaDirection::Negative => format!("{}", self.value),
        }
    }
}

/// Display tier of a candidate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ScoreTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreTier {
    pub fn for_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreTier::Excellent
        } else if score >= 80.0 {
            ScoreTier::Good
        } else if score >= 70.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            ScoreTier::Excellent => ColorToken::Green,
            ScoreTier::Good => ColorToken::Blue,
            ScoreTier::Fair => ColorToken::Orange,
            ScoreTier::Poor => ColorToken::Red,
        }
    }
}
