//! Search result bias
//!
//! Each topic has two authored result lists: a balanced one and a
//! filter-bubble one that only contains viewpoint-aligned content.

pub mod result;
pub mod selector;
pub mod topic;

pub use result::{SearchResult, Stance, StanceStyle, stance_style};
pub use selector::{StanceBreakdown, select_results};
pub use topic::{ResultMode, Topic};
