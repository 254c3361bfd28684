//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant describes a value that was rejected at the boundary between
/// the caller and the computation layer. None of them are retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid skew percentage: {0} (expected a number in 0..=100)")]
    InvalidSkew(f64),

    #[error("Unknown topic: {0}. Valid: climate, healthcare, ai")]
    UnknownTopic(String),

    #[error("Unknown stance: {0}. Valid: pro, neutral, con")]
    UnknownStance(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("No matching candidates")]
    NoMatchingCandidates,
}

impl DomainError {
    /// Check if this error came from an input the caller should have validated
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, DomainError::NoMatchingCandidates)
    }
}
