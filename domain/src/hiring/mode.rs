//! Hiring demonstration modes

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two pre-authored scores is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Qualifications only
    Fair,
    /// Trained on historical hiring decisions
    #[default]
    HistoricallyBiased,
}

impl ScoringMode {
    pub fn is_biased(&self) -> bool {
        matches!(self, ScoringMode::HistoricallyBiased)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ScoringMode::Fair => ScoringMode::HistoricallyBiased,
            ScoringMode::HistoricallyBiased => ScoringMode::Fair,
        }
    }

    /// Get a human-readable description of this mode
    pub fn description(&self) -> &'static str {
        match self {
            ScoringMode::Fair => "Fair Model",
            ScoringMode::HistoricallyBiased => "Biased Model (Historical Data)",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Fair => write!(f, "fair"),
            ScoringMode::HistoricallyBiased => write!(f, "biased"),
        }
    }
}

impl std::str::FromStr for ScoringMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fair" => Ok(ScoringMode::Fair),
            "biased" | "historically_biased" | "historical" => Ok(ScoringMode::HistoricallyBiased),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}

/// Which analysis of the candidate pool is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisView {
    /// Ranked list of every candidate
    #[default]
    All,
    /// Average score per gender
    Gender,
    /// Score plotted against age
    Age,
}

impl AnalysisView {
    pub fn description(&self) -> &'static str {
        match self {
            AnalysisView::All => "All Candidates",
            AnalysisView::Gender => "Gender Analysis",
            AnalysisView::Age => "Age Analysis",
        }
    }
}

impl fmt::Display for AnalysisView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisView::All => write!(f, "all"),
            AnalysisView::Gender => write!(f, "gender"),
            AnalysisView::Age => write!(f, "age"),
        }
    }
}

impl std::str::FromStr for AnalysisView {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(AnalysisView::All),
            "gender" => Ok(AnalysisView::Gender),
            "age" => Ok(AnalysisView::Age),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}
