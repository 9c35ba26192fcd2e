//! Portfolio-level and segment-level summary aggregates

use crate::client::{ClientRecord, RiskTier, Segment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// High-level portfolio metrics for a (possibly filtered) set of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_contracts: usize,
    pub total_members: u64,
    pub total_premium: f64,
    pub avg_ivi_score: Option<f64>,
    pub median_ivi_score: Option<f64>,
    pub high_risk_count: usize,
    pub moderate_risk_count: usize,
    pub low_risk_count: usize,
    pub avg_loss_ratio: Option<f64>,
    /// Mean observed retention, when the outcome column is populated
    pub retention_rate: Option<f64>,
}

/// Per-segment rollup row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub segment: Segment,
    pub contract_count: usize,
    pub total_members: u64,
    pub total_premium: f64,
    pub avg_ivi_score: f64,
    pub avg_loss_ratio: Option<f64>,
    pub retention_rate: Option<f64>,
}

/// Compute portfolio summary metrics over the given records
pub fn portfolio_summary(records: &[ClientRecord]) -> PortfolioSummary {
    let mut ivi: Vec<f64> = records.iter().map(|r| r.ivi_score).collect();
    ivi.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let risk_count =
        |tier: RiskTier| records.iter().filter(|r| r.ivi_risk == tier).count();

    PortfolioSummary {
        total_contracts: records.len(),
        total_members: records.iter().map(|r| r.total_members as u64).sum(),
        total_premium: records.iter().map(|r| r.written_premium).sum(),
        avg_ivi_score: mean(&ivi),
        median_ivi_score: median(&ivi),
        high_risk_count: risk_count(RiskTier::HighRisk),
        moderate_risk_count: risk_count(RiskTier::ModerateRisk),
        low_risk_count: risk_count(RiskTier::LowRisk),
        avg_loss_ratio: mean_of(records, |r| r.loss_ratio),
        retention_rate: mean_of(records, |r| r.retained_next_year),
    }
}

/// Compute per-segment rollups, sorted by contract count descending
pub fn segment_summary(records: &[ClientRecord]) -> Vec<SegmentSummary> {
    let mut by_segment: HashMap<Segment, Vec<&ClientRecord>> = HashMap::new();
    for record in records {
        by_segment.entry(record.segment).or_default().push(record);
    }

    let mut rows: Vec<SegmentSummary> = by_segment
        .into_iter()
        .map(|(segment, members)| {
            let ivi_sum: f64 = members.iter().map(|r| r.ivi_score).sum();
            SegmentSummary {
                segment,
                contract_count: members.len(),
                total_members: members.iter().map(|r| r.total_members as u64).sum(),
                total_premium: members.iter().map(|r| r.written_premium).sum(),
                avg_ivi_score: ivi_sum / members.len() as f64,
                avg_loss_ratio: mean_of_refs(&members, |r| r.loss_ratio),
                retention_rate: mean_of_refs(&members, |r| r.retained_next_year),
            }
        })
        .collect();

    // Count descending; segment attention rank breaks ties deterministically
    rows.sort_by(|a, b| {
        b.contract_count
            .cmp(&a.contract_count)
            .then(a.segment.attention_rank().cmp(&b.segment.attention_rank()))
    });
    rows
}

fn mean(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        None
    } else {
        Some(sorted.iter().sum::<f64>() / sorted.len() as f64)
    }
}

fn median(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

fn mean_of(records: &[ClientRecord], field: impl Fn(&ClientRecord) -> Option<f64>) -> Option<f64> {
    let values: Vec<f64> = records.iter().filter_map(&field).collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn mean_of_refs(
    records: &[&ClientRecord],
    field: impl Fn(&ClientRecord) -> Option<f64>,
) -> Option<f64> {
    let values: Vec<f64> = records.iter().filter_map(|r| field(r)).collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(segment: Segment, tier: RiskTier, ivi: f64, members: u32, premium: f64) -> ClientRecord {
        ClientRecord {
            contract_no: format!("C-{ivi}"),
            year: "2022".to_string(),
            ivi_score: ivi,
            ivi_risk: tier,
            segment,
            total_members: members,
            written_premium: premium,
            loss_ratio: Some(1.1),
            cost_per_member: None,
            utilization_rate: None,
            calls_per_member: None,
            rejection_rate: None,
            approval_rate: None,
            avg_resolution_days: None,
            diagnoses_per_utilizer: None,
            max_claim_amount: None,
            retained_next_year: Some(1.0),
            primary_region: None,
        }
    }

    #[test]
    fn test_portfolio_summary_totals() {
        let records = vec![
            record(Segment::HighRiskLargeUnprofitable, RiskTier::HighRisk, 30.0, 300, 1_000_000.0),
            record(Segment::ModerateRiskSmallProfitable, RiskTier::ModerateRisk, 60.0, 40, 80_000.0),
            record(Segment::LowRiskSmallProfitable, RiskTier::LowRisk, 90.0, 25, 50_000.0),
        ];

        let summary = portfolio_summary(&records);
        assert_eq!(summary.total_contracts, 3);
        assert_eq!(summary.total_members, 365);
        assert_relative_eq!(summary.total_premium, 1_130_000.0);
        assert_relative_eq!(summary.avg_ivi_score.unwrap(), 60.0);
        assert_relative_eq!(summary.median_ivi_score.unwrap(), 60.0);
        assert_eq!(summary.high_risk_count, 1);
        assert_eq!(summary.moderate_risk_count, 1);
        assert_eq!(summary.low_risk_count, 1);
        assert_relative_eq!(summary.retention_rate.unwrap(), 1.0);
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = portfolio_summary(&[]);
        assert_eq!(summary.total_contracts, 0);
        assert!(summary.avg_ivi_score.is_none());
        assert!(summary.median_ivi_score.is_none());
    }

    #[test]
    fn test_segment_summary_sorted_by_count() {
        let records = vec![
            record(Segment::LowRiskSmallProfitable, RiskTier::LowRisk, 85.0, 10, 20_000.0),
            record(Segment::LowRiskSmallProfitable, RiskTier::LowRisk, 88.0, 12, 25_000.0),
            record(Segment::HighRiskLargeUnprofitable, RiskTier::HighRisk, 25.0, 500, 2_000_000.0),
        ];

        let rows = segment_summary(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].segment, Segment::LowRiskSmallProfitable);
        assert_eq!(rows[0].contract_count, 2);
        assert_relative_eq!(rows[0].avg_ivi_score, 86.5);
        assert_eq!(rows[1].contract_count, 1);
    }
}
