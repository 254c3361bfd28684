//! Configuration loading errors

use biaslab_application::ConfigIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[source] Box<figment::Error>),

    #[error("Invalid configuration: {}", summarize(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn summarize(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use biaslab_application::{ConfigIssueCode, Severity};

    #[test]
    fn test_invalid_lists_only_errors() {
        let err = ConfigError::Invalid(vec![
            ConfigIssue::new(
                Severity::Warning,
                ConfigIssueCode::FixedDivisor,
                "fixed divisor".to_string(),
            ),
            ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::ZeroDivisor,
                "zero divisor".to_string(),
            ),
        ]);
        assert_eq!(err.to_string(), "Invalid configuration: zero divisor");
    }
}
