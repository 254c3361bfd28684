//! Hiring configuration from TOML (`[hiring]` section)
//!
//! ```toml
//! [hiring]
//! average_divisor = "matched_count"   # or "fixed:N"
//! ```

use biaslab_application::{ConfigIssue, ConfigIssueCode, Severity};
use biaslab_domain::AverageDivisor;
use serde::{Deserialize, Serialize};

/// Raw hiring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHiringConfig {
    /// Averaging divisor: "matched_count" or "fixed:N"
    pub average_divisor: String,
}

impl Default for FileHiringConfig {
    fn default() -> Self {
        Self {
            average_divisor: "matched_count".to_string(),
        }
    }
}

impl FileHiringConfig {
    /// Parse the divisor string, falling back to the matched count.
    pub fn parse_average_divisor(&self) -> (AverageDivisor, Vec<ConfigIssue>) {
        match parse_divisor(&self.average_divisor) {
            Some(divisor) => (divisor, vec![]),
            None => (
                AverageDivisor::default(),
                vec![ConfigIssue::new(
                    Severity::Warning,
                    ConfigIssueCode::InvalidDivisor,
                    format!(
                        "hiring.average_divisor: unknown value '{}', falling back to 'matched_count'. \
                         Valid: matched_count, fixed:N",
                        self.average_divisor
                    ),
                )],
            ),
        }
    }
}

fn parse_divisor(s: &str) -> Option<AverageDivisor> {
    let s = s.trim().to_lowercase();
    match s.as_str() {
        "matched_count" | "matched" | "count" => Some(AverageDivisor::MatchedCount),
        _ => s
            .strip_prefix("fixed:")
            .and_then(|n| n.trim().parse().ok())
            .map(AverageDivisor::Fixed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_divisor(value: &str) -> FileHiringConfig {
        FileHiringConfig {
            average_divisor: value.to_string(),
        }
    }

    #[test]
    fn test_hiring_config_default() {
        let (divisor, issues) = FileHiringConfig::default().parse_average_divisor();
        assert_eq!(divisor, AverageDivisor::MatchedCount);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_parse_fixed() {
        let (divisor, issues) = with_divisor("fixed:3").parse_average_divisor();
        assert_eq!(divisor, AverageDivisor::Fixed(3));
        assert!(issues.is_empty());

        let (divisor, _) = with_divisor(" Fixed: 6 ").parse_average_divisor();
        assert_eq!(divisor, AverageDivisor::Fixed(6));
    }

    #[test]
    fn test_parse_invalid_falls_back() {
        for value in ["fixed:", "fixed:-1", "mean", ""] {
            let (divisor, issues) = with_divisor(value).parse_average_divisor();
            assert_eq!(divisor, AverageDivisor::MatchedCount, "{value}");
            assert_eq!(issues.len(), 1, "{value}");
            assert_eq!(issues[0].code, ConfigIssueCode::InvalidDivisor);
        }
    }
}
