//! Aggregate views over a candidate pool

use super::candidate::{Candidate, Gender};
use super::mode::ScoringMode;
use super::ranking::{AverageDivisor, ScoreDelta, ScoreTier, group_average_with, rank_candidates};
use serde::Serialize;

/// A candidate at a position in the ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate<'a> {
    /// 1-based position
    pub rank: usize,
    pub candidate: &'a Candidate,
    /// Active score under the ranking mode
    pub score: f64,
    pub tier: ScoreTier,
    pub delta: Option<ScoreDelta>,
}

impl<'a> RankedCandidate<'a> {
    /// Rank `candidates` and annotate each entry
    pub fn rank_all(candidates: &'a [Candidate], mode: ScoringMode) -> Vec<Self> {
        rank_candidates(candidates, mode)
            .into_iter()
            .enumerate()
            .map(|(i, candidate)| {
                let score = candidate.score(mode);
                Self {
                    rank: i + 1,
                    candidate,
                    score,
                    tier: ScoreTier::for_score(score),
                    delta: ScoreDelta::for_candidate(candidate, mode),
                }
            })
            .collect()
    }
}

/// Average score per gender and the gap between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenderStats {
    pub male: f64,
    pub female: f64,
    pub gap: f64,
}

impl GenderStats {
    /// Returns `None` if either gender has no candidates in the pool
    pub fn compute(
        candidates: &[Candidate],
        mode: ScoringMode,
        divisor: AverageDivisor,
    ) -> Option<Self> {
        let average = |gender: Gender| {
            group_average_with(candidates, |c| c.gender() == gender, mode, divisor)
        };

        let male = average(Gender::Male)?;
        let female = average(Gender::Female)?;
        Some(Self {
            male,
            female,
            gap: (male - female).abs(),
        })
    }
}

/// One dot on the score-versus-age chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgePoint<'a> {
    pub name: &'a str,
    pub age: u32,
    pub score: f64,
    /// Horizontal position in percent of the chart width
    pub x: f64,
    /// Vertical position in percent of the chart height
    pub y: f64,
}

impl<'a> AgePoint<'a> {
    /// Youngest age on the horizontal axis
    pub const AXIS_ORIGIN_AGE: f64 = 25.0;
    /// Chart width percent per year of age
    pub const PERCENT_PER_YEAR: f64 = 3.0;

    /// Points for every candidate, in ranked order
    pub fn plot(candidates: &'a [Candidate], mode: ScoringMode) -> Vec<Self> {
        rank_candidates(candidates, mode)
            .into_iter()
            .map(|c| {
                let score = c.score(mode);
                Self {
                    name: &c.name,
                    age: c.age(),
                    score,
                    x: (c.age() as f64 - Self::AXIS_ORIGIN_AGE) * Self::PERCENT_PER_YEAR,
                    y: score,
                }
            })
            .collect()
    }
}
