//! Demonstration session state
//!
//! [`DemoSession`] holds the only mutable state in the system: the current
//! slider position, mode toggles and selectors. Inputs are validated here,
//! at the boundary, before any domain function sees them. After every change
//! the affected report is recomputed from scratch and handed to the
//! [`ReportSink`].

use crate::config::SimulationConfig;
use crate::ports::report_sink::{NoReportSink, ReportSink};
use crate::use_cases::facial_recognition::{FacialRecognitionReport, FacialRecognitionUseCase};
use crate::use_cases::hiring::{HiringInput, HiringReport, HiringUseCase};
use crate::use_cases::search_bias::{SearchBiasInput, SearchBiasReport, SearchBiasUseCase};
use crate::use_cases::skewed_dataset::{SkewedDatasetInput, SkewedDatasetUseCase};
use biaslab_domain::{
    AnalysisView, DatasetMode, DomainError, ResultMode, ScoringMode, SkewReport, SkewSplit, Topic,
};
use serde::Serialize;
use tracing::info;

/// Current parameter values of every demonstration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DemoParameters {
    pub skew: SkewSplit,
    pub scoring_mode: ScoringMode,
    pub analysis_view: AnalysisView,
    pub dataset_mode: DatasetMode,
    pub topic: Topic,
    pub result_mode: ResultMode,
}

/// All four reports for the current parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoSnapshot {
    pub skew: SkewReport,
    pub hiring: HiringReport<'static>,
    pub facial: FacialRecognitionReport,
    pub search: SearchBiasReport,
}

/// Parameter holder that recomputes on every change
pub struct DemoSession {
    params: DemoParameters,
    skewed_dataset: SkewedDatasetUseCase,
    hiring: HiringUseCase<'static>,
    facial: FacialRecognitionUseCase,
    search: SearchBiasUseCase,
    sink: Box<dyn ReportSink>,
}

impl DemoSession {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            params: DemoParameters::default(),
            skewed_dataset: SkewedDatasetUseCase::new(config),
            hiring: HiringUseCase::new(config),
            facial: FacialRecognitionUseCase::new(),
            search: SearchBiasUseCase::new(),
            sink: Box::new(NoReportSink),
        }
    }

    /// Deliver every recomputed report to `sink`
    pub fn with_sink(mut self, sink: Box<dyn ReportSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn parameters(&self) -> &DemoParameters {
        &self.params
    }

    // ==================== Skewed dataset ====================

    /// Move the skew slider; returns the recomputed report
    ///
    /// Values outside `0..=100` are clamped. NaN is rejected and leaves the
    /// current position unchanged.
    pub fn set_skew(&mut self, group_a_percentage: f64) -> Result<SkewReport, DomainError> {
        let report = self
            .skewed_dataset
            .execute(SkewedDatasetInput::new(group_a_percentage))?;
        self.params.skew = report.split;
        info!(
            "Skew set to {}/{}",
            report.split.group_a(),
            report.split.group_b()
        );
        self.sink.on_skew_report(&report);
        Ok(report)
    }

    pub fn skew_report(&self) -> SkewReport {
        self.skewed_dataset.report_for(self.params.skew)
    }

    // ==================== Hiring ====================

    pub fn set_scoring_mode(&mut self, mode: ScoringMode) -> HiringReport<'static> {
        self.params.scoring_mode = mode;
        info!("Scoring mode set to {}", mode);
        self.publish_hiring()
    }

    pub fn toggle_scoring_mode(&mut self) -> HiringReport<'static> {
        self.set_scoring_mode(self.params.scoring_mode.toggled())
    }

    pub fn set_analysis_view(&mut self, view: AnalysisView) -> HiringReport<'static> {
        self.params.analysis_view = view;
        info!("Analysis view set to {}", view);
        self.publish_hiring()
    }

    pub fn hiring_report(&self) -> HiringReport<'static> {
        self.hiring.execute(HiringInput::new(
            self.params.scoring_mode,
            self.params.analysis_view,
        ))
    }

    fn publish_hiring(&self) -> HiringReport<'static> {
        let report = self.hiring_report();
        self.sink.on_hiring_report(&report);
        report
    }

    // ==================== Facial recognition ====================

    pub fn set_dataset_mode(&mut self, mode: DatasetMode) -> FacialRecognitionReport {
        self.params.dataset_mode = mode;
        info!("Facial dataset set to {}", mode);
        let report = self.facial_report();
        self.sink.on_facial_report(&report);
        report
    }

    pub fn toggle_dataset_mode(&mut self) -> FacialRecognitionReport {
        self.set_dataset_mode(self.params.dataset_mode.toggled())
    }

    pub fn facial_report(&self) -> FacialRecognitionReport {
        self.facial.execute(self.params.dataset_mode)
    }

    // ==================== Search ====================

    pub fn set_topic(&mut self, topic: Topic) -> SearchBiasReport {
        self.params.topic = topic;
        info!("Search topic set to {}", topic);
        self.publish_search()
    }

    /// Select a topic by name; unknown names leave the current topic unchanged
    pub fn select_topic(&mut self, name: &str) -> Result<SearchBiasReport, DomainError> {
        let input = SearchBiasInput::from_names(name, self.params.result_mode)?;
        Ok(self.set_topic(input.topic))
    }

    pub fn set_result_mode(&mut self, mode: ResultMode) -> SearchBiasReport {
        self.params.result_mode = mode;
        info!("Result mode set to {}", mode);
        self.publish_search()
    }

    pub fn toggle_result_mode(&mut self) -> SearchBiasReport {
        self.set_result_mode(self.params.result_mode.toggled())
    }

    pub fn search_report(&self) -> SearchBiasReport {
        self.search.execute(SearchBiasInput::new(
            self.params.topic,
            self.params.result_mode,
        ))
    }

    fn publish_search(&self) -> SearchBiasReport {
        let report = self.search_report();
        self.sink.on_search_report(&report);
        report
    }

    // ==================== Snapshot ====================

    /// Recompute every report for the current parameters
    pub fn snapshot(&self) -> DemoSnapshot {
        DemoSnapshot {
            skew: self.skew_report(),
            hiring: self.hiring_report(),
            facial: self.facial_report(),
            search: self.search_report(),
        }
    }
}

impl Default for DemoSession {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
