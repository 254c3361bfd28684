//! Static reference data
//!
//! Every table is a `static` slice selected by an exhaustive `match` on the
//! demonstration's enums, so there is no runtime-mutable state and a missing
//! `(topic, mode)` pair is a compile error.

mod candidates;
mod facial;
mod search;

pub use candidates::reference_candidates;
pub use facial::{facial_groups, facial_metrics, max_reference_samples};
pub use search::search_results;
