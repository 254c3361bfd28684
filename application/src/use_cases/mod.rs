//! Use cases
//!
//! One use case per demonstration. Each takes the current parameter values,
//! calls the pure domain functions and returns a fresh report. Nothing is
//! cached between calls.

pub mod facial_recognition;
pub mod hiring;
pub mod search_bias;
pub mod skewed_dataset;
