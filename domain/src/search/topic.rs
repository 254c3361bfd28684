//! Search topics and result modes

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of searchable topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    #[default]
    Climate,
    Healthcare,
    Ai,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Climate, Topic::Healthcare, Topic::Ai];

    /// Button label for the topic
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Climate => "Climate Change",
            Topic::Healthcare => "Healthcare Policy",
            Topic::Ai => "AI Development",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Climate => write!(f, "climate"),
            Topic::Healthcare => write!(f, "healthcare"),
            Topic::Ai => write!(f, "ai"),
        }
    }
}

impl std::str::FromStr for Topic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "climate" => Ok(Topic::Climate),
            "healthcare" => Ok(Topic::Healthcare),
            "ai" => Ok(Topic::Ai),
            _ => Err(DomainError::UnknownTopic(s.to_string())),
        }
    }
}

/// How results are selected for a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultMode {
    /// A spread of viewpoints
    #[default]
    Balanced,
    /// Only viewpoint-aligned content
    FilterBubble,
}

impl ResultMode {
    pub const ALL: [ResultMode; 2] = [ResultMode::Balanced, ResultMode::FilterBubble];

    pub fn toggled(&self) -> Self {
        match self {
            ResultMode::Balanced => ResultMode::FilterBubble,
            ResultMode::FilterBubble => ResultMode::Balanced,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResultMode::Balanced => "Balanced Results",
            ResultMode::FilterBubble => "Filter Bubble",
        }
    }
}

impl fmt::Display for ResultMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultMode::Balanced => write!(f, "balanced"),
            ResultMode::FilterBubble => write!(f, "filter_bubble"),
        }
    }
}

impl std::str::FromStr for ResultMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" => Ok(ResultMode::Balanced),
            "filter_bubble" | "filterbubble" | "bubble" => Ok(ResultMode::FilterBubble),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}
