//! Search bias use case
//!
//! Resolves `(topic, mode)` to the authored result list and styles each
//! result by stance.

use biaslab_domain::{
    DomainError, ResultMode, SearchResult, StanceBreakdown, StanceStyle, Topic, select_results,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Input for the SearchBias use case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchBiasInput {
    pub topic: Topic,
    pub mode: ResultMode,
}

impl SearchBiasInput {
    pub fn new(topic: Topic, mode: ResultMode) -> Self {
        Self { topic, mode }
    }

    /// Parse an untrusted topic name
    pub fn from_names(topic: &str, mode: ResultMode) -> Result<Self, DomainError> {
        let topic = topic.parse::<Topic>().map_err(|e| {
            warn!("{}", e);
            e
        })?;
        Ok(Self { topic, mode })
    }
}

/// A result together with its stance badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyledResult {
    pub result: SearchResult,
    pub style: StanceStyle,
}

/// Everything the search-bias demonstration shows for one parameter set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBiasReport {
    pub topic: Topic,
    pub mode: ResultMode,
    pub results: Vec<StyledResult>,
    pub breakdown: StanceBreakdown,
}

/// Use case for the search-bias demonstration
#[derive(Debug, Default)]
pub struct SearchBiasUseCase;

impl SearchBiasUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, input: SearchBiasInput) -> SearchBiasReport {
        let results = select_results(input.topic, input.mode);
        let breakdown = StanceBreakdown::of(results);

        debug!(
            topic = %input.topic,
            mode = %input.mode,
            pro = breakdown.pro,
            neutral = breakdown.neutral,
            con = breakdown.con,
            "Recomputed search report"
        );

        SearchBiasReport {
            topic: input.topic,
            mode: input.mode,
            results: results
                .iter()
                .map(|r| StyledResult {
                    result: *r,
                    style: r.style(),
                })
                .collect(),
            breakdown,
        }
    }
}
