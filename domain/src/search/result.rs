//! Search results and their stance styling

use crate::core::color::ColorToken;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a result relative to its topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Pro,
    Neutral,
    Con,
}

impl Stance {
    pub const ALL: [Stance; 3] = [Stance::Pro, Stance::Neutral, Stance::Con];
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stance::Pro => write!(f, "pro"),
            Stance::Neutral => write!(f, "neutral"),
            Stance::Con => write!(f, "con"),
        }
    }
}

impl std::str::FromStr for Stance {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pro" => Ok(Stance::Pro),
            "neutral" => Ok(Stance::Neutral),
            "con" => Ok(Stance::Con),
            _ => Err(DomainError::UnknownStance(s.to_string())),
        }
    }
}

/// Badge styling for a stance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StanceStyle {
    pub color: ColorToken,
    pub label: &'static str,
}

/// Badge colour and label for `stance`
pub fn stance_style(stance: Stance) -> StanceStyle {
    match stance {
        Stance::Pro => StanceStyle {
            color: ColorToken::Blue,
            label: "Pro",
        },
        Stance::Neutral => StanceStyle {
            color: ColorToken::Green,
            label: "Neutral",
        },
        Stance::Con => StanceStyle {
            color: ColorToken::Orange,
            label: "Con",
        },
    }
}

/// One authored search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: &'static str,
    pub source: &'static str,
    pub snippet: &'static str,
    pub stance: Stance,
}

impl SearchResult {
    pub fn style(&self) -> StanceStyle {
        stance_style(self.stance)
    }
}
