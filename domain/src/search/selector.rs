//! Result-set selection

use super::result::{SearchResult, Stance};
use super::topic::{ResultMode, Topic};
use crate::registry;
use serde::Serialize;

/// The authored result list for `(topic, mode)`, in authored order
///
/// Topics are a closed enum, so this lookup is total. Untrusted topic names
/// are validated by parsing into [`Topic`] before getting here.
///
/// # Example
///
/// ```
/// use biaslab_domain::search::{ResultMode, Stance, Topic, select_results};
///
/// let bubble = select_results(Topic::Climate, ResultMode::FilterBubble);
/// assert!(bubble.iter().all(|r| r.stance == Stance::Pro));
/// ```
pub fn select_results(topic: Topic, mode: ResultMode) -> &'static [SearchResult] {
    registry::search_results(topic, mode)
}

/// Count of results per stance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StanceBreakdown {
    pub pro: usize,
    pub neutral: usize,
    pub con: usize,
}

impl StanceBreakdown {
    pub fn of(results: &[SearchResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            match r.stance {
                Stance::Pro => acc.pro += 1,
                Stance::Neutral => acc.neutral += 1,
                Stance::Con => acc.con += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.pro + self.neutral + self.con
    }

    /// Whether the list contains no neutral coverage at all
    pub fn is_polarized(&self) -> bool {
        self.total() > 0 && self.neutral == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_climate_balanced() {
        let results = select_results(Topic::Climate, ResultMode::Balanced);
        assert_eq!(results.len(), 4);
        assert!(
            results
                .iter()
                .all(|r| matches!(r.stance, Stance::Neutral | Stance::Con))
        );
        assert_eq!(
            results[0].title,
            "Climate Change: Scientific Consensus and Evidence"
        );
        assert_eq!(results[3].stance, Stance::Con);
    }

    #[test]
    fn test_climate_filter_bubble() {
        let results = select_results(Topic::Climate, ResultMode::FilterBubble);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.stance == Stance::Pro));
        assert_eq!(results[0].source, "EcoWarrior");
    }

    #[test]
    fn test_every_pair_has_results() {
        for topic in Topic::ALL {
            for mode in ResultMode::ALL {
                assert_eq!(select_results(topic, mode).len(), 4, "{topic}/{mode}");
            }
        }
    }

    #[test]
    fn test_filter_bubbles_are_polarized() {
        for topic in Topic::ALL {
            let bubble = StanceBreakdown::of(select_results(topic, ResultMode::FilterBubble));
            assert!(bubble.is_polarized(), "{topic}");

            let balanced = StanceBreakdown::of(select_results(topic, ResultMode::Balanced));
            assert!(!balanced.is_polarized(), "{topic}");
        }
    }

    #[test]
    fn test_breakdown_counts() {
        let breakdown = StanceBreakdown::of(select_results(Topic::Ai, ResultMode::FilterBubble));
        assert_eq!(
            breakdown,
            StanceBreakdown {
                pro: 2,
                neutral: 0,
                con: 2
            }
        );
        assert!(!StanceBreakdown::default().is_polarized());
    }
}
