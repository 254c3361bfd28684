//! Application-level configuration.
//!
//! [`SimulationConfig`] carries the tunable constants of every formula the
//! demonstrations use. Defaults reproduce the reference behaviour exactly.

mod simulation;
pub mod validation;

pub use simulation::SimulationConfig;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
