//! Report sink that logs every recomputation

use biaslab_application::{
    FacialRecognitionReport, HiringAnalysis, HiringReport, ReportSink, SearchBiasReport,
};
use biaslab_domain::SkewReport;
use tracing::{debug, info};

/// Emits one structured `info` event per report
///
/// Individual rows (ranked candidates, metric cards, results) are logged at
/// `debug`.
#[derive(Debug, Default)]
pub struct TracingReportSink;

impl TracingReportSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for TracingReportSink {
    fn on_skew_report(&self, report: &SkewReport) {
        info!(
            group_a = report.split.group_a(),
            group_b = report.split.group_b(),
            accuracy_a = report.accuracy_a,
            accuracy_b = report.accuracy_b,
            difference = report.difference,
            bias_level = report.bias_level.as_str(),
            "Skew report"
        );
    }

    fn on_hiring_report(&self, report: &HiringReport<'_>) {
        match &report.analysis {
            HiringAnalysis::All { ranked } => {
                info!(mode = %report.mode, candidates = ranked.len(), "Hiring ranking");
                for entry in ranked {
                    debug!(
                        rank = entry.rank,
                        name = %entry.candidate.name,
                        score = entry.score,
                        "Ranked candidate"
                    );
                }
            }
            HiringAnalysis::Gender { stats: Some(stats) } => {
                info!(
                    mode = %report.mode,
                    male = stats.male,
                    female = stats.female,
                    gap = stats.gap,
                    "Hiring gender averages"
                );
            }
            HiringAnalysis::Gender { stats: None } => {
                info!(mode = %report.mode, "Hiring gender averages unavailable");
            }
            HiringAnalysis::Age { points } => {
                info!(mode = %report.mode, points = points.len(), "Hiring age plot");
            }
        }
    }

    fn on_facial_report(&self, report: &FacialRecognitionReport) {
        info!(
            mode = %report.mode,
            groups = report.cards.len(),
            accuracy_gap = report.summary.map(|s| s.accuracy_gap),
            "Facial recognition report"
        );
        for card in &report.cards {
            debug!(
                group = card.metric.group.name,
                accuracy = card.metric.accuracy,
                false_positive_rate = card.metric.false_positive_rate,
                "Group metric"
            );
        }
    }

    fn on_search_report(&self, report: &SearchBiasReport) {
        info!(
            topic = %report.topic,
            mode = %report.mode,
            pro = report.breakdown.pro,
            neutral = report.breakdown.neutral,
            con = report.breakdown.con,
            "Search report"
        );
    }
}
