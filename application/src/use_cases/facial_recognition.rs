//! Facial recognition use case
//!
//! Selects one of the two fixed metric sets and lays out its cards.

use biaslab_domain::registry;
use biaslab_domain::{DatasetMode, DatasetSummary, MetricCard};
use serde::Serialize;
use tracing::debug;

/// Everything the facial-recognition demonstration shows for one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacialRecognitionReport {
    pub mode: DatasetMode,
    pub cards: Vec<MetricCard>,
    pub summary: Option<DatasetSummary>,
}

/// Use case for the facial-recognition demonstration
#[derive(Debug, Default)]
pub struct FacialRecognitionUseCase;

impl FacialRecognitionUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, mode: DatasetMode) -> FacialRecognitionReport {
        let metrics = registry::facial_metrics(mode);
        // Both sets share the skewed set's scale so bars stay comparable.
        let max_samples = registry::max_reference_samples();

        let cards = metrics
            .iter()
            .map(|m| MetricCard::new(*m, max_samples))
            .collect();
        let summary = DatasetSummary::compute(metrics);

        debug!(mode = %mode, groups = metrics.len(), "Recomputed facial recognition report");

        FacialRecognitionReport {
            mode,
            cards,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biaslab_domain::FalsePositiveSeverity;

    #[test]
    fn test_skewed_cards() {
        let report = FacialRecognitionUseCase::new().execute(DatasetMode::Skewed);
        assert_eq!(report.cards.len(), 4);
        assert_eq!(report.cards[0].sample_bar_width, 100.0);
        assert_eq!(
            report.cards[3].false_positive_severity,
            FalsePositiveSeverity::Severe
        );
        assert!((report.cards[3].false_positive_bar_height - 88.9).abs() < 1e-9);
    }

    #[test]
    fn test_balanced_cards_use_skewed_scale() {
        let report = FacialRecognitionUseCase::new().execute(DatasetMode::Balanced);
        for card in &report.cards {
            assert!((card.sample_bar_width - 5000.0 / 8500.0 * 100.0).abs() < 1e-9);
            assert_eq!(
                card.false_positive_severity,
                FalsePositiveSeverity::Acceptable
            );
        }
    }

    #[test]
    fn test_summary_present() {
        let report = FacialRecognitionUseCase::new().execute(DatasetMode::Balanced);
        let summary = report.summary.unwrap();
        assert!((summary.accuracy_gap - 3.1).abs() < 1e-9);
    }
}
