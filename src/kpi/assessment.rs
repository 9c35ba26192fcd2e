//! Classify a client KPI against its cohort benchmark

use super::{Direction, Kpi};
use serde::{Deserialize, Serialize};

/// Status tier for a client-vs-benchmark comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpiStatus {
    Excellent,
    Normal,
    Concern,
}

impl KpiStatus {
    /// Display color used by report renderers
    pub fn color(&self) -> &'static str {
        match self {
            KpiStatus::Excellent => "green",
            KpiStatus::Normal => "gray",
            KpiStatus::Concern => "red",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KpiStatus::Excellent => "EXCELLENT",
            KpiStatus::Normal => "NORMAL",
            KpiStatus::Concern => "CONCERN",
        }
    }
}

/// Which side of the benchmark the client value sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Above,
    Below,
    Equal,
}

impl Comparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Above => "above",
            Comparison::Below => "below",
            Comparison::Equal => "equal",
        }
    }
}

/// Result of comparing one client KPI to its benchmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiAssessment {
    pub client_value: f64,
    pub benchmark_value: f64,
    /// Percent difference from the benchmark; 0 when the benchmark is 0
    pub pct_difference: f64,
    pub status: KpiStatus,
    pub comparison: Comparison,
}

/// Assess a client value against a benchmark value.
///
/// Thresholds are asymmetric by direction and use strict comparisons: a
/// value sitting exactly on a threshold takes the milder classification
/// (e.g. pct_difference of exactly -20 with `higher_is_better = false` is
/// Normal, not Excellent).
pub fn assess_value(client_value: f64, benchmark_value: f64, higher_is_better: bool) -> KpiAssessment {
    let pct_difference = if benchmark_value == 0.0 {
        0.0
    } else {
        (client_value - benchmark_value) / benchmark_value * 100.0
    };

    let status = if higher_is_better {
        if pct_difference > 20.0 {
            KpiStatus::Excellent
        } else if pct_difference > -10.0 {
            KpiStatus::Normal
        } else {
            KpiStatus::Concern
        }
    } else if pct_difference < -20.0 {
        KpiStatus::Excellent
    } else if pct_difference < 10.0 {
        KpiStatus::Normal
    } else {
        KpiStatus::Concern
    };

    let comparison = if pct_difference > 0.0 {
        Comparison::Above
    } else if pct_difference < 0.0 {
        Comparison::Below
    } else {
        Comparison::Equal
    };

    KpiAssessment {
        client_value,
        benchmark_value,
        pct_difference,
        status,
        comparison,
    }
}

/// Assess a named KPI, deriving the comparison direction from its definition
pub fn assess_kpi(kpi: Kpi, client_value: f64, benchmark_value: f64) -> KpiAssessment {
    let higher_is_better = kpi.definition().direction == Direction::HigherIsBetter;
    assess_value(client_value, benchmark_value, higher_is_better)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lower_is_better_classification() {
        // 30% below benchmark: excellent
        let a = assess_value(70.0, 100.0, false);
        assert_eq!(a.status, KpiStatus::Excellent);
        assert_eq!(a.comparison, Comparison::Below);

        // slightly above: still normal below the +10 line
        let a = assess_value(105.0, 100.0, false);
        assert_eq!(a.status, KpiStatus::Normal);
        assert_eq!(a.comparison, Comparison::Above);

        // 10% or more above: concern
        let a = assess_value(110.0, 100.0, false);
        assert_eq!(a.status, KpiStatus::Concern);
    }

    #[test]
    fn test_higher_is_better_classification() {
        let a = assess_value(125.0, 100.0, true);
        assert_eq!(a.status, KpiStatus::Excellent);

        let a = assess_value(95.0, 100.0, true);
        assert_eq!(a.status, KpiStatus::Normal);

        // exactly -10: not strictly greater, so concern
        let a = assess_value(90.0, 100.0, true);
        assert_eq!(a.status, KpiStatus::Concern);
    }

    #[test]
    fn test_minus_twenty_boundary_is_normal() {
        // pct_difference of exactly -20 does not satisfy the strict < -20
        let a = assess_value(80.0, 100.0, false);
        assert_relative_eq!(a.pct_difference, -20.0);
        assert_eq!(a.status, KpiStatus::Normal);
    }

    #[test]
    fn test_zero_benchmark_guard() {
        let a = assess_value(50.0, 0.0, false);
        assert_eq!(a.pct_difference, 0.0);
        assert_eq!(a.status, KpiStatus::Normal);
        assert_eq!(a.comparison, Comparison::Equal);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(KpiStatus::Excellent.color(), "green");
        assert_eq!(KpiStatus::Normal.color(), "gray");
        assert_eq!(KpiStatus::Concern.color(), "red");
    }

    #[test]
    fn test_assess_kpi_uses_direction() {
        // Approval rate is the only higher-is-better KPI
        let a = assess_kpi(Kpi::ApprovalRate, 0.95, 0.75);
        assert_eq!(a.status, KpiStatus::Excellent);

        // Same relative position on a lower-is-better KPI reads as concern
        let a = assess_kpi(Kpi::RejectionRate, 0.95, 0.75);
        assert_eq!(a.status, KpiStatus::Concern);
    }

    #[test]
    fn test_idempotent() {
        let a = assess_value(80.0, 104.0, false);
        let b = assess_value(80.0, 104.0, false);
        assert_eq!(a, b);
    }
}
