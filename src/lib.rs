//! IVI System - Client value scoring and recommendation engine for corporate
//! health insurance portfolios
//!
//! This library provides:
//! - Typed ingestion of the materialized IVI score table
//! - KPI assessment against portfolio or segment benchmarks
//! - Rule-based recommendation generation per client
//! - Priority scoring for account-management attention ranking
//! - Portfolio, segment, and benchmark aggregates

pub mod client;
pub mod kpi;
pub mod portfolio;
pub mod ranking;
pub mod recommend;

// Re-export commonly used types
pub use client::{ClientRecord, RiskTier, Segment};
pub use kpi::{assess_kpi, Kpi, KpiAssessment};
pub use portfolio::BenchmarkStats;
pub use ranking::{rank_by_priority, RankedClient};
pub use recommend::{calculate_priority_score, generate_recommendations, Recommendation};
