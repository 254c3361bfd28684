//! Core domain concepts shared across all demonstrations.
//!
//! - [`color::ColorToken`]: the closed palette every visual decision maps onto
//! - [`error::DomainError`]: domain-level errors

pub mod color;
pub mod error;
