//! Hiring use case
//!
//! Ranks the candidate pool under the active scoring mode and builds the
//! selected analysis view.

use crate::config::SimulationConfig;
use biaslab_domain::registry;
use biaslab_domain::{
    AgePoint, AnalysisView, Candidate, GenderStats, RankedCandidate, ScoringMode,
};
use serde::Serialize;
use tracing::debug;

/// Input for the Hiring use case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HiringInput {
    pub mode: ScoringMode,
    pub view: AnalysisView,
}

impl HiringInput {
    pub fn new(mode: ScoringMode, view: AnalysisView) -> Self {
        Self { mode, view }
    }
}

/// Content of the selected analysis view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum HiringAnalysis<'a> {
    All { ranked: Vec<RankedCandidate<'a>> },
    /// `stats` is `None` when one gender has no candidates
    Gender { stats: Option<GenderStats> },
    Age { points: Vec<AgePoint<'a>> },
}

/// Everything the hiring demonstration shows for one parameter set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiringReport<'a> {
    pub mode: ScoringMode,
    pub analysis: HiringAnalysis<'a>,
}

/// Use case for the hiring demonstration
pub struct HiringUseCase<'a> {
    config: SimulationConfig,
    candidates: &'a [Candidate],
}

impl HiringUseCase<'static> {
    /// Use case over the six reference candidates
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            candidates: registry::reference_candidates(),
        }
    }
}

impl<'a> HiringUseCase<'a> {
    /// Use case over a custom candidate pool
    pub fn with_candidates(config: SimulationConfig, candidates: &'a [Candidate]) -> Self {
        Self { config, candidates }
    }

    pub fn execute(&self, input: HiringInput) -> HiringReport<'a> {
        let analysis = match input.view {
            AnalysisView::All => HiringAnalysis::All {
                ranked: RankedCandidate::rank_all(self.candidates, input.mode),
            },
            AnalysisView::Gender => {
                let stats =
                    GenderStats::compute(self.candidates, input.mode, self.config.average_divisor);
                if stats.is_none() {
                    debug!("Gender analysis skipped: a gender has no matching candidates");
                }
                HiringAnalysis::Gender { stats }
            }
            AnalysisView::Age => HiringAnalysis::Age {
                points: AgePoint::plot(self.candidates, input.mode),
            },
        };

        debug!(
            mode = %input.mode,
            view = %input.view,
            candidates = self.candidates.len(),
            "Recomputed hiring report"
        );

        HiringReport {
            mode: input.mode,
            analysis,
        }
    }
}
