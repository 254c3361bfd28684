//! Colour tokens
//!
//! The renderer owns the actual palette; the computation layer only ever
//! decides *which* accent applies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accent colour chosen by the computation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Purple,
    Orange,
    Red,
    Green,
}

impl ColorToken {
    /// Every token, in palette order
    pub const ALL: [ColorToken; 5] = [
        ColorToken::Blue,
        ColorToken::Purple,
        ColorToken::Orange,
        ColorToken::Red,
        ColorToken::Green,
    ];

    /// Stable lowercase name of the token
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Blue => "blue",
            ColorToken::Purple => "purple",
            ColorToken::Orange => "orange",
            ColorToken::Red => "red",
            ColorToken::Green => "green",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        for token in ColorToken::ALL {
            let json = serde_json::to_string(&token).unwrap();
            assert_eq!(json, format!("\"{}\"", token));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = ColorToken::ALL.iter().map(|t| t.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ColorToken::ALL.len());
    }
}
