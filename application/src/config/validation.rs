//! Configuration issues.
//!
//! Validation never fails fast: every problem is collected as a
//! [`ConfigIssue`] so a caller can report all of them at once and decide
//! whether any is fatal.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the formulas cannot produce values in their documented ranges.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// An accuracy or threshold constant is NaN or infinite.
    NonFiniteConstant,
    CeilingBelowBaseline,
    FloorAboveBaseline,
    NegativeSlope,
    BalancePointOutOfRange,
    ThresholdsNotAscending,
    ZeroDivisor,
    /// A fixed averaging divisor is configured.
    FixedDivisor,
    /// The averaging divisor could not be parsed.
    InvalidDivisor,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(severity: Severity, code: ConfigIssueCode, message: String) -> Self {
        Self {
            severity,
            code,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
