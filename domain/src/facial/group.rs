//! Demographic groups and their measured metrics

use crate::core::color::ColorToken;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A demographic group in the facial-recognition demonstration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Group {
    pub name: &'static str,
    /// Training samples in the skewed reference set
    pub reference_sample_count: u32,
    pub color: ColorToken,
}

/// Metrics measured for one group on one training set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupMetric {
    pub group: Group,
    pub training_samples: u32,
    /// Percent, `0..=100`
    pub accuracy: f64,
    /// Percent
    pub false_positive_rate: f64,
}

/// Which training set the metrics come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetMode {
    #[default]
    Skewed,
    Balanced,
}

impl DatasetMode {
    pub const ALL: [DatasetMode; 2] = [DatasetMode::Skewed, DatasetMode::Balanced];

    pub fn toggled(&self) -> Self {
        match self {
            DatasetMode::Skewed => DatasetMode::Balanced,
            DatasetMode::Balanced => DatasetMode::Skewed,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DatasetMode::Skewed => "Biased Dataset",
            DatasetMode::Balanced => "Balanced Dataset",
        }
    }
}

impl fmt::Display for DatasetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetMode::Skewed => write!(f, "skewed"),
            DatasetMode::Balanced => write!(f, "balanced"),
        }
    }
}

impl std::str::FromStr for DatasetMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skewed" | "biased" => Ok(DatasetMode::Skewed),
            "balanced" => Ok(DatasetMode::Balanced),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(DatasetMode::Skewed.toggled(), DatasetMode::Balanced);
        assert_eq!(DatasetMode::Balanced.toggled(), DatasetMode::Skewed);
    }

    #[test]
    fn test_parse() {
        assert_eq!("biased".parse::<DatasetMode>().ok(), Some(DatasetMode::Skewed));
        assert_eq!(
            "Balanced".parse::<DatasetMode>().ok(),
            Some(DatasetMode::Balanced)
        );
        assert!("mixed".parse::<DatasetMode>().is_err());
    }
}
