//! Recommendation engine: rule battery, priority scoring, segment plans
//!
//! All functions here are pure and total over their inputs: missing KPIs
//! default to zero, benchmark gaps fall back to fixed constants, and no
//! call path allocates shared state. Safe to invoke concurrently.

mod priority;
mod rules;
mod segments;

pub use priority::{calculate_priority_score, client_priority_score};
pub use rules::{generate_recommendations, Priority, Recommendation};
pub use segments::{segment_action_plan, PlanPriority, SegmentPlan};
