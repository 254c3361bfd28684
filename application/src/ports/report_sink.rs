//! Report delivery port
//!
//! Defines the interface through which freshly computed reports reach
//! whatever renders them.

use crate::use_cases::facial_recognition::FacialRecognitionReport;
use crate::use_cases::hiring::HiringReport;
use crate::use_cases::search_bias::SearchBiasReport;
use biaslab_domain::SkewReport;

/// Callback invoked after every recomputation
///
/// Implementations live in outer layers and render or log the reports.
/// Every method defaults to a no-op so a renderer only implements the
/// demonstrations it shows.
pub trait ReportSink: Send + Sync {
    /// Called when the skew slider moved
    fn on_skew_report(&self, _report: &SkewReport) {}

    /// Called when the scoring mode or analysis view changed
    fn on_hiring_report(&self, _report: &HiringReport<'_>) {}

    /// Called when the facial-recognition dataset was switched
    fn on_facial_report(&self, _report: &FacialRecognitionReport) {}

    /// Called when the search topic or result mode changed
    fn on_search_report(&self, _report: &SearchBiasReport) {}
}

/// No-op sink for when nothing renders the reports
pub struct NoReportSink;

impl ReportSink for NoReportSink {}
