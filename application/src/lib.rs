//! Application layer for biaslab
//!
//! This crate contains the demonstration use cases, the report delivery
//! port, simulation configuration and the session that owns the mutable
//! parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity, SimulationConfig};
pub use ports::report_sink::{NoReportSink, ReportSink};
pub use session::{DemoParameters, DemoSession, DemoSnapshot};
pub use use_cases::facial_recognition::{FacialRecognitionReport, FacialRecognitionUseCase};
pub use use_cases::hiring::{HiringAnalysis, HiringInput, HiringReport, HiringUseCase};
pub use use_cases::search_bias::{
    SearchBiasInput, SearchBiasReport, SearchBiasUseCase, StyledResult,
};
pub use use_cases::skewed_dataset::{SkewedDatasetInput, SkewedDatasetUseCase};
