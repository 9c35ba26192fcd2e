//! Cohort benchmark statistics computed from score-table records

use crate::client::{ClientRecord, Segment};
use serde::{Deserialize, Serialize};

/// Mean KPI values and IVI percentiles over a comparison cohort
///
/// Every field is optional: a KPI that is absent from every record in the
/// cohort (or an empty cohort) yields `None`, and consumers fall back to
/// their own defaults. The struct is a plain value; compute it once per
/// cohort and share it across clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkStats {
    pub avg_utilization_rate: Option<f64>,
    pub avg_loss_ratio: Option<f64>,
    pub avg_cost_per_member: Option<f64>,
    pub avg_calls_per_member: Option<f64>,
    pub avg_rejection_rate: Option<f64>,
    pub avg_approval_rate: Option<f64>,
    pub avg_resolution_days: Option<f64>,
    pub avg_diagnoses_per_utilizer: Option<f64>,
    pub p25_ivi_score: Option<f64>,
    pub p50_ivi_score: Option<f64>,
    pub p75_ivi_score: Option<f64>,
}

impl BenchmarkStats {
    /// Compute benchmarks over all records
    pub fn from_records(records: &[ClientRecord]) -> Self {
        let ivi: Vec<f64> = records.iter().map(|r| r.ivi_score).collect();

        Self {
            avg_utilization_rate: mean_opt(records, |r| r.utilization_rate),
            avg_loss_ratio: mean_opt(records, |r| r.loss_ratio),
            avg_cost_per_member: mean_opt(records, |r| r.cost_per_member),
            avg_calls_per_member: mean_opt(records, |r| r.calls_per_member),
            avg_rejection_rate: mean_opt(records, |r| r.rejection_rate),
            avg_approval_rate: mean_opt(records, |r| r.approval_rate),
            avg_resolution_days: mean_opt(records, |r| r.avg_resolution_days),
            avg_diagnoses_per_utilizer: mean_opt(records, |r| r.diagnoses_per_utilizer),
            p25_ivi_score: quantile(&ivi, 0.25),
            p50_ivi_score: quantile(&ivi, 0.50),
            p75_ivi_score: quantile(&ivi, 0.75),
        }
    }

    /// Compute benchmarks over a single segment's records
    pub fn for_segment(records: &[ClientRecord], segment: Segment) -> Self {
        let cohort: Vec<ClientRecord> = records
            .iter()
            .filter(|r| r.segment == segment)
            .cloned()
            .collect();
        Self::from_records(&cohort)
    }
}

/// Mean of an optional KPI over the cohort, skipping absent cells
fn mean_opt(records: &[ClientRecord], field: impl Fn(&ClientRecord) -> Option<f64>) -> Option<f64> {
    let values: Vec<f64> = records.iter().filter_map(&field).collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Linear-interpolated quantile, q in [0, 1]
fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let weight = pos - lower as f64;
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}
