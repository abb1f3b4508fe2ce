//! Command planning: free text in, structured plan out.

pub mod planner;
pub mod types;

pub use planner::{normalize_url, CommandPlanner};
pub use types::{CommandAction, CommandKind, CommandPlan};
